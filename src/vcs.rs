//! Version-control probes.
//!
//! Git gets a full porcelain parser ([`git`]); hg, svn, and fossil are lighter
//! plug-ins. All of them run through [`VcsRunner`], which pins the locale,
//! strips the environment down to `HOME` and `PATH`, and bounds run time.
//!
//! Every failure is local: a producer that gets a [`VcsError`] appends nothing.

pub mod fossil;
pub mod git;
pub mod hg;
pub mod svn;

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use crate::shell_exec::Cmd;

/// Why a VCS probe produced no data.
#[derive(Debug)]
pub enum VcsError {
    /// The tool binary could not be executed (missing, not executable, ...)
    ToolUnavailable {
        program: String,
        source: std::io::Error,
    },
    /// The tool ran past the configured timeout and was killed
    TimedOut { program: String },
    /// The tool ran but exited non-zero, i.e. this isn't one of its checkouts
    NotARepository { program: String, code: Option<i32> },
}

impl std::fmt::Display for VcsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VcsError::ToolUnavailable { program, source } => {
                write!(f, "{program} is unavailable: {source}")
            }
            VcsError::TimedOut { program } => write!(f, "{program} timed out"),
            VcsError::NotARepository { program, code } => match code {
                Some(code) => write!(f, "not a {program} repository (exit status {code})"),
                None => write!(f, "not a {program} repository (terminated by signal)"),
            },
        }
    }
}

impl std::error::Error for VcsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VcsError::ToolUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl VcsError {
    /// Timeouts are indistinguishable from a missing tool for the prompt.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            VcsError::ToolUnavailable { .. } | VcsError::TimedOut { .. }
        )
    }
}

/// Runs VCS tools in a fixed, minimal environment.
#[derive(Debug, Clone)]
pub struct VcsRunner<'a> {
    pub dir: &'a Path,
    pub home: Option<&'a str>,
    pub path: Option<&'a str>,
    pub timeout: Duration,
}

impl VcsRunner<'_> {
    /// Run `program args`, returning the raw output whatever the exit status.
    pub fn output(&self, program: &str, args: &[&str]) -> Result<Output, VcsError> {
        // LANG=C keeps the output English and machine-parsable
        let mut cmd = Cmd::new(program)
            .args(args.iter().copied())
            .current_dir(self.dir)
            .context(program)
            .timeout(self.timeout)
            .env_clear()
            .env("LANG", "C");
        if let Some(home) = self.home {
            cmd = cmd.env("HOME", home);
        }
        if let Some(path) = self.path {
            cmd = cmd.env("PATH", path);
        }

        cmd.run().map_err(|source| {
            if source.kind() == std::io::ErrorKind::TimedOut {
                VcsError::TimedOut {
                    program: program.to_string(),
                }
            } else {
                VcsError::ToolUnavailable {
                    program: program.to_string(),
                    source,
                }
            }
        })
    }

    /// Run `program args` and return stdout, treating a non-zero exit as
    /// [`VcsError::NotARepository`].
    pub fn stdout(&self, program: &str, args: &[&str]) -> Result<String, VcsError> {
        let output = self.output(program, args)?;
        if !output.status.success() {
            return Err(VcsError::NotARepository {
                program: program.to_string(),
                code: output.status.code(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Branch plus coarse dirtiness, shared by the hg and fossil segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingCopySummary {
    pub branch: String,
    pub modified: bool,
    pub untracked: bool,
    pub missing: bool,
}

impl WorkingCopySummary {
    pub fn is_dirty(&self) -> bool {
        self.modified || self.untracked || self.missing
    }

    /// `+` for untracked files, then `!` for missing ones
    pub fn markers(&self) -> String {
        let mut markers = String::new();
        if self.untracked {
            markers.push('+');
        }
        if self.missing {
            markers.push('!');
        }
        markers
    }

    /// Segment text: ` branch ` or ` branch +! `
    pub fn label(&self) -> String {
        let markers = self.markers();
        if markers.is_empty() {
            format!(" {} ", self.branch)
        } else {
            format!(" {} {} ", self.branch, markers)
        }
    }
}
