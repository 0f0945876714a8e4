//! Working-directory segments.

use std::path::Path;

use super::PromptContext;
use crate::config::CwdMode;
use crate::path::{limit_depth, replace_home_dir, shorten_name, split_path_into_names};
use crate::prompt::Prompt;
use crate::styling::{
    self, CWD_FG, ELLIPSIS, LOCK, PATH_BG, PATH_FG, READONLY_BG, READONLY_FG, SEPARATOR_THIN_FG,
};

pub(super) fn cwd(ctx: &PromptContext, prompt: &mut Prompt) {
    let settings = &ctx.config.cwd;
    let path = replace_home_dir(&ctx.cwd.reported, ctx.env.home.as_deref());

    if settings.mode == CwdMode::Plain {
        prompt.append(path, CWD_FG, PATH_BG);
        return;
    }

    let mut names = split_path_into_names(&path);
    if settings.max_depth == 0 {
        styling::warn("Ignoring cwd max-depth since it's not greater than 0");
    } else {
        names = limit_depth(names, settings.max_depth);
    }
    if settings.mode == CwdMode::Dironly {
        names = names.split_off(names.len().saturating_sub(1));
    }

    let thin = prompt.separator_thin();
    let last = names.len().saturating_sub(1);
    for (idx, name) in names.iter().enumerate() {
        // Leading separator for paths outside ~ and /
        if idx == 0 && !["~", "/", ELLIPSIS].contains(&name.as_str()) {
            prompt.append_with("", PATH_FG, PATH_BG, Some(thin), Some(SEPARATOR_THIN_FG));
        }
        let text = shorten_name(name, settings.max_dir_size);
        if idx == last {
            prompt.append(text, CWD_FG, PATH_BG);
        } else {
            prompt.append_with(text, PATH_FG, PATH_BG, Some(thin), Some(SEPARATOR_THIN_FG));
        }
    }
}

/// Lock marker when the directory isn't writable.
pub(super) fn read_only(ctx: &PromptContext, prompt: &mut Prompt) {
    if !is_writable(&ctx.cwd.valid) {
        prompt.append_with(LOCK, READONLY_FG, READONLY_BG, Some(">"), None);
    }
}

#[cfg(unix)]
fn is_writable(dir: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(dir, AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable(dir: &Path) -> bool {
    std::fs::metadata(dir).is_ok_and(|m| !m.permissions().readonly())
}
