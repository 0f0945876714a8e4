//! Mercurial probe: `hg branch` plus `hg status`.

use super::{VcsError, VcsRunner, WorkingCopySummary};

/// Query the working copy, or `None` when `hg branch` prints nothing.
pub fn query(runner: &VcsRunner<'_>) -> Result<Option<WorkingCopySummary>, VcsError> {
    let branch = runner.stdout("hg", &["branch"])?;
    let branch = branch.trim_end();
    if branch.is_empty() {
        return Ok(None);
    }

    let status = runner.output("hg", &["status"])?;
    let mut summary = parse_status(&String::from_utf8_lossy(&status.stdout));
    summary.branch = branch.to_string();
    Ok(Some(summary))
}

/// Flags from `hg status`: `?` untracked, `!` missing, any other code modified.
pub fn parse_status(output: &str) -> WorkingCopySummary {
    let mut summary = WorkingCopySummary::default();
    for line in output.lines() {
        match line.chars().next() {
            None => continue,
            Some('?') => summary.untracked = true,
            Some('!') => summary.missing = true,
            Some(_) => summary.modified = true,
        }
    }
    summary
}
