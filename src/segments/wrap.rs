//! Bracket segments that frame the prompt.

use super::PromptContext;
use crate::prompt::Prompt;
use crate::styling::{CMD_PASSED_BG, CMD_PASSED_FG};

pub(super) fn begin(_ctx: &PromptContext, prompt: &mut Prompt) {
    prompt.append_with("[", CMD_PASSED_FG, CMD_PASSED_BG, Some(""), None);
}

pub(super) fn end(_ctx: &PromptContext, prompt: &mut Prompt) {
    prompt.append_with("]", CMD_PASSED_FG, CMD_PASSED_BG, Some(""), None);
}
