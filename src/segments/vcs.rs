//! Repository segments for git, hg, svn, and fossil.
//!
//! Each probe failure only means "no segment here"; the reason goes to the
//! debug log.

use super::PromptContext;
use crate::prompt::Prompt;
use crate::styling::{
    REPO_CLEAN_BG, REPO_CLEAN_FG, REPO_DIRTY_BG, REPO_DIRTY_FG, SVN_CHANGES_BG, SVN_CHANGES_FG,
};
use crate::vcs::{VcsError, WorkingCopySummary, fossil, git, hg, svn};

pub(super) fn git(ctx: &PromptContext, prompt: &mut Prompt) {
    match git::query_status(&ctx.vcs_runner()) {
        Ok(status) => append_git_status(prompt, &status),
        Err(e) => skip("git", &e),
    }
}

/// `(branch`, one sub-segment per non-zero counter, then `)`.
///
/// Everything takes the dirty colors as soon as the working tree has changes.
pub fn append_git_status(prompt: &mut Prompt, status: &git::GitStatus) {
    let (fg, bg) = repo_colors(status.is_dirty());
    prompt.append_with(format!("({}", status.head.label()), fg, bg, Some(""), None);
    for (_, label) in status.stats.labels() {
        prompt.append_with(label, fg, bg, Some(""), None);
    }
    prompt.append(")", fg, bg);
}

pub(super) fn hg(ctx: &PromptContext, prompt: &mut Prompt) {
    match hg::query(&ctx.vcs_runner()) {
        Ok(Some(summary)) => append_summary(prompt, &summary),
        Ok(None) => {}
        Err(e) => skip("hg", &e),
    }
}

pub(super) fn fossil(ctx: &PromptContext, prompt: &mut Prompt) {
    match fossil::query(&ctx.vcs_runner()) {
        Ok(Some(summary)) => append_summary(prompt, &summary),
        Ok(None) => {}
        Err(e) => skip("fossil", &e),
    }
}

/// Count of changed paths, shown only when non-zero.
pub(super) fn svn(ctx: &PromptContext, prompt: &mut Prompt) {
    match svn::query(&ctx.vcs_runner()) {
        Ok(Some(0)) | Ok(None) => {}
        Ok(Some(changes)) => prompt.append(format!(" {changes} "), SVN_CHANGES_FG, SVN_CHANGES_BG),
        Err(e) => skip("svn", &e),
    }
}

fn append_summary(prompt: &mut Prompt, summary: &WorkingCopySummary) {
    let (fg, bg) = repo_colors(summary.is_dirty());
    prompt.append(summary.label(), fg, bg);
}

fn repo_colors(dirty: bool) -> (u8, u8) {
    if dirty {
        (REPO_DIRTY_FG, REPO_DIRTY_BG)
    } else {
        (REPO_CLEAN_FG, REPO_CLEAN_BG)
    }
}

fn skip(segment: &str, error: &VcsError) {
    if error.is_unavailable() {
        log::debug!("Skipping {segment} segment, tool unavailable: {error}");
    } else {
        log::debug!("Skipping {segment} segment: {error}");
    }
}
