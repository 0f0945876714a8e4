//! Shell flavors and their prompt escape conventions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported shells
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Shell {
    #[default]
    Bash,
    Zsh,
    /// No prompt escaping; raw ANSI sequences (tests, other shells)
    Bare,
}

impl Shell {
    /// Wrap a raw escape sequence so the shell does not count it toward the
    /// prompt width.
    ///
    /// `sequence` is a complete ANSI sequence starting with ESC. Bash gets the
    /// `\e` spelling inside `\[ \]` because PS1 expands it itself.
    pub fn wrap_escape(self, sequence: &str) -> String {
        match self {
            Shell::Bash => {
                let body = sequence.strip_prefix('\x1b').unwrap_or(sequence);
                format!("\\[\\e{body}\\]")
            }
            Shell::Zsh => format!("%{{{sequence}%}}"),
            Shell::Bare => sequence.to_string(),
        }
    }

    /// Prompt character shown by the root segment
    pub fn root_indicator(self) -> &'static str {
        match self {
            Shell::Bash => " \\$ ",
            Shell::Zsh => "%#",
            Shell::Bare => " $ ",
        }
    }

    /// Prompt escape expanding to the user name, if the shell has one.
    pub fn username_escape(self) -> Option<&'static str> {
        match self {
            Shell::Bash => Some("\\u"),
            Shell::Zsh => Some("%n"),
            Shell::Bare => None,
        }
    }

    /// Prompt escape expanding to the short host name, if the shell has one.
    pub fn hostname_escape(self) -> Option<&'static str> {
        match self {
            Shell::Bash => Some("\\h"),
            Shell::Zsh => Some("%m"),
            Shell::Bare => None,
        }
    }
}
