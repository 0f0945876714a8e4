//! Who and where: virtualenv, ssh marker, user and host names.

use std::path::Path;

use super::PromptContext;
use crate::prompt::Prompt;
use crate::styling::{
    HOSTNAME_BG, HOSTNAME_FG, NETWORK, SSH_BG, SSH_FG, USERNAME_BG, USERNAME_FG,
    USERNAME_ROOT_BG, VIRTUAL_ENV_BG, VIRTUAL_ENV_FG,
};

/// Name of the active Python virtualenv or conda environment.
pub(super) fn virtual_env(ctx: &PromptContext, prompt: &mut Prompt) {
    let env = &ctx.env;
    let Some(active) = [&env.virtual_env, &env.conda_env_path]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
    else {
        return;
    };
    let name = Path::new(active)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    prompt.append(format!(" {name} "), VIRTUAL_ENV_FG, VIRTUAL_ENV_BG);
}

pub(super) fn ssh(ctx: &PromptContext, prompt: &mut Prompt) {
    if ctx.env.is_ssh() {
        prompt.append_with(NETWORK, SSH_FG, SSH_BG, Some(">"), None);
    }
}

/// `user`, only over ssh. Root gets a warning background.
pub(super) fn username(ctx: &PromptContext, prompt: &mut Prompt) {
    if !ctx.env.is_ssh() {
        return;
    }
    let text = match prompt.shell().username_escape() {
        Some(escape) => escape.to_string(),
        None => ctx.env.user.clone().unwrap_or_default(),
    };
    let bg = if ctx.env.user.as_deref() == Some("root") {
        USERNAME_ROOT_BG
    } else {
        USERNAME_BG
    };
    prompt.append_with(text, USERNAME_FG, bg, Some(""), None);
}

/// `@host`, only over ssh.
pub(super) fn hostname(ctx: &PromptContext, prompt: &mut Prompt) {
    if !ctx.env.is_ssh() {
        return;
    }
    let host = match prompt.shell().hostname_escape() {
        Some(escape) => escape.to_string(),
        None => ctx.env.hostname.clone().unwrap_or_default(),
    };
    prompt.append_with("@", HOSTNAME_FG, HOSTNAME_BG, Some(""), None);
    prompt.append_with(format!("{host} "), HOSTNAME_FG, HOSTNAME_BG, Some(""), None);
}
