//! Pure parsers for `git status --porcelain -b` output.

use std::sync::LazyLock;

use regex::Regex;

use super::stats::RepoStats;

/// `## local[...remote[ [ahead N][, ][behind M]]]`
static BRANCH_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^## (?P<local>\S+?)(\.{3}(?P<remote>\S+?)( \[(ahead (?P<ahead>\d+)(, )?)?(behind (?P<behind>\d+))?\])?)?$",
    )
    .expect("branch header pattern is valid")
});

/// Unmerged path codes. Only these count as conflicts.
const CONFLICT_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Branch and upstream tracking parsed from the status header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub local: String,
    pub remote: Option<String>,
    pub ahead: Option<usize>,
    pub behind: Option<usize>,
}

/// Which counters a single porcelain line contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Untracked,
    Conflicted,
    Changed { staged: bool, not_staged: bool },
}

/// Parse the `## ...` header line.
///
/// Returns `None` for anything the pattern doesn't match, such as
/// `## HEAD (no branch)` or `## No commits yet on main`; callers treat that as
/// a detached HEAD.
pub fn parse_branch_header(line: &str) -> Option<BranchInfo> {
    let caps = BRANCH_HEADER.captures(line)?;
    let count = |name: &str| caps.name(name).and_then(|m| m.as_str().parse().ok());
    Some(BranchInfo {
        local: caps["local"].to_string(),
        remote: caps.name("remote").map(|m| m.as_str().to_string()),
        ahead: count("ahead"),
        behind: count("behind"),
    })
}

/// Classify a two-character status code. First match wins:
/// `??` is untracked, an unmerged pair is a conflict, anything else counts
/// toward staged (index column) and/or not staged (worktree column).
pub fn classify_status_code(code: &str) -> FileStatus {
    if code == "??" {
        return FileStatus::Untracked;
    }
    if CONFLICT_CODES.contains(&code) {
        return FileStatus::Conflicted;
    }
    let mut chars = code.chars();
    let index = chars.next().unwrap_or(' ');
    let worktree = chars.next().unwrap_or(' ');
    FileStatus::Changed {
        staged: index != ' ',
        not_staged: worktree != ' ',
    }
}

/// Count file statuses from the body lines (everything after the header).
///
/// Ahead/behind are left at zero; they come from the header.
pub fn parse_file_stats<'a>(lines: impl IntoIterator<Item = &'a str>) -> RepoStats {
    let mut stats = RepoStats::default();
    for line in lines {
        let Some(code) = line.get(..2) else {
            continue;
        };
        match classify_status_code(code) {
            FileStatus::Untracked => stats.untracked += 1,
            FileStatus::Conflicted => stats.conflicted += 1,
            FileStatus::Changed { staged, not_staged } => {
                if not_staged {
                    stats.not_staged += 1;
                }
                if staged {
                    stats.staged += 1;
                }
            }
        }
    }
    stats
}
