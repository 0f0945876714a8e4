//! Fossil probe: `fossil branch`, `fossil changes`, and `fossil extras`.

use super::{VcsError, VcsRunner, WorkingCopySummary};

/// Query the checkout, or `None` when no current branch is marked.
pub fn query(runner: &VcsRunner<'_>) -> Result<Option<WorkingCopySummary>, VcsError> {
    // Bare invocation only proves the binary runs
    runner.output("fossil", &[])?;

    let branches = runner.output("fossil", &["branch"])?;
    let branch = current_branch(&String::from_utf8_lossy(&branches.stdout));
    if branch.is_empty() {
        return Ok(None);
    }

    let changes = runner.output("fossil", &["changes"])?;
    let extras = runner.output("fossil", &["extras"])?;
    let mut summary = parse_changes(
        &String::from_utf8_lossy(&changes.stdout),
        &String::from_utf8_lossy(&extras.stdout),
    );
    summary.branch = branch;
    Ok(Some(summary))
}

/// The branch marked with `*` in `fossil branch` output.
pub fn current_branch(output: &str) -> String {
    output
        .trim()
        .lines()
        .filter(|line| line.starts_with('*'))
        .map(|line| line.replace('*', "").trim().to_string())
        .collect()
}

/// Dirtiness from `fossil changes` (`EDITED`, `MISSING`) and `fossil extras`.
pub fn parse_changes(changes: &str, extras: &str) -> WorkingCopySummary {
    let changes = changes.trim();
    WorkingCopySummary {
        branch: String::new(),
        modified: changes.contains("EDITED"),
        untracked: !extras.trim().is_empty(),
        missing: changes.contains("MISSING"),
    }
}
