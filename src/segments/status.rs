//! Previous-command status and the shell's root indicator.

use super::PromptContext;
use crate::prompt::Prompt;
use crate::styling::{CMD_FAILED_BG, CMD_FAILED_FG, CMD_PASSED_BG, CMD_PASSED_FG};

/// The previous exit code, only when it was non-zero.
pub(super) fn exit_code(ctx: &PromptContext, prompt: &mut Prompt) {
    if ctx.prev_error == 0 {
        return;
    }
    prompt.append(
        format!(" {} ", ctx.prev_error),
        CMD_FAILED_FG,
        CMD_FAILED_BG,
    );
}

/// `$`/`#`, colored by the previous command's outcome.
pub(super) fn root(ctx: &PromptContext, prompt: &mut Prompt) {
    let (fg, bg) = if ctx.prev_error == 0 {
        (CMD_PASSED_FG, CMD_PASSED_BG)
    } else {
        (CMD_FAILED_FG, CMD_FAILED_BG)
    };
    let indicator = prompt.shell().root_indicator();
    prompt.append_with(indicator, fg, bg, Some(""), None);
}
