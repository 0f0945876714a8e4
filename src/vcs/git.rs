//! Git status probe.
//!
//! One `git status --porcelain -b` call yields branch, upstream delta, and
//! per-file codes. When the header doesn't name a branch, a second
//! `git describe` call decides between a detached HEAD and an empty repository.

mod parse;
mod stats;

pub use parse::{BranchInfo, FileStatus, classify_status_code, parse_branch_header, parse_file_stats};
pub use stats::{RepoStats, StatKind};

use super::{VcsError, VcsRunner};

/// Label for a HEAD that points at a commit rather than a branch
pub const DETACHED_LABEL: &str = "HEAD detached";

/// Label for a repository with no commits to describe
pub const EMPTY_REPO_LABEL: &str = "Big Bang";

/// What HEAD is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(BranchInfo),
    Detached(&'static str),
}

impl Head {
    /// Text shown in the branch segment
    pub fn label(&self) -> &str {
        match self {
            Head::Branch(info) => &info.local,
            Head::Detached(label) => label,
        }
    }
}

/// Parsed repository state for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStatus {
    pub stats: RepoStats,
    pub head: Head,
}

impl GitStatus {
    pub fn is_dirty(&self) -> bool {
        self.stats.is_dirty()
    }
}

/// Build a [`GitStatus`] from porcelain output.
///
/// `describe_detached` is only called when the header has no branch.
pub fn parse_status(output: &str, describe_detached: impl FnOnce() -> &'static str) -> GitStatus {
    let mut lines = output.lines();
    let header = lines.next().unwrap_or_default();
    let mut stats = parse_file_stats(lines);

    let head = match parse_branch_header(header) {
        Some(info) => {
            stats.ahead = info.ahead.unwrap_or(0);
            stats.behind = info.behind.unwrap_or(0);
            Head::Branch(info)
        }
        None => {
            log::debug!("Unrecognized status header {header:?}, treating HEAD as detached");
            Head::Detached(describe_detached())
        }
    };

    GitStatus { stats, head }
}

/// Query git for the status of the runner's directory.
///
/// Errors mean "no git segment": git is missing, timed out, or the directory
/// isn't inside a repository.
pub fn query_status(runner: &VcsRunner<'_>) -> Result<GitStatus, VcsError> {
    let output = runner.stdout("git", &["status", "--porcelain", "-b"])?;
    Ok(parse_status(&output, || describe_detached(runner)))
}

/// `git describe` succeeds when there is at least one commit to name.
fn describe_detached(runner: &VcsRunner<'_>) -> &'static str {
    match runner.stdout("git", &["describe", "--tags", "--always"]) {
        Ok(_) => DETACHED_LABEL,
        Err(e) => {
            log::debug!("git describe failed: {e}");
            EMPTY_REPO_LABEL
        }
    }
}
