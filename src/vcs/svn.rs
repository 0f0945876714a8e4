//! Subversion probe: number of changed paths from `svn status`.

use super::{VcsError, VcsRunner};

/// First-column codes that count as a change.
const CHANGE_CODES: &[char] = &['A', 'C', 'D', 'I', 'M', 'R', '!', '~'];

/// Count changed paths, or `None` outside a working copy.
///
/// `svn status` exits zero with a warning on stderr when the directory isn't a
/// working copy, so stderr output is what rules it out.
pub fn query(runner: &VcsRunner<'_>) -> Result<Option<usize>, VcsError> {
    let output = runner.output("svn", &["status"])?;
    if !String::from_utf8_lossy(&output.stderr).trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(count_changes(&String::from_utf8_lossy(&output.stdout))))
}

/// Count lines whose first character is a change code.
pub fn count_changes(output: &str) -> usize {
    output
        .lines()
        .filter(|line| line.starts_with(CHANGE_CODES))
        .count()
}
