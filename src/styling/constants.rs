//! Palette and glyph constants for prompt rendering.
//!
//! Colors are xterm 256-color indices. They are emitted as `38;5;N` (foreground)
//! and `48;5;N` (background) sequences by [`crate::prompt::Prompt`].

use anstyle::{AnsiColor, Color, Style};

// ============================================================================
// Segment palette
// ============================================================================

pub const USERNAME_FG: u8 = 15;
pub const USERNAME_BG: u8 = 0;
pub const USERNAME_ROOT_BG: u8 = 1;

pub const HOSTNAME_FG: u8 = 15;
pub const HOSTNAME_BG: u8 = 0;

pub const PATH_FG: u8 = 3;
pub const PATH_BG: u8 = 0;
/// Foreground for the whole path in `plain` cwd mode
pub const CWD_FG: u8 = 3;

/// Default separator foreground, used when a segment does not pick its own
pub const SEPARATOR_FG: u8 = 2;
pub const SEPARATOR_THIN_FG: u8 = 14;

pub const READONLY_FG: u8 = 1;
pub const READONLY_BG: u8 = 0;

pub const SSH_FG: u8 = 1;
pub const SSH_BG: u8 = 0;

pub const REPO_CLEAN_FG: u8 = 14;
pub const REPO_CLEAN_BG: u8 = 0;
pub const REPO_DIRTY_FG: u8 = 9;
pub const REPO_DIRTY_BG: u8 = 0;

pub const CMD_PASSED_FG: u8 = 13;
pub const CMD_PASSED_BG: u8 = 0;
pub const CMD_FAILED_FG: u8 = 0;
pub const CMD_FAILED_BG: u8 = 1;

pub const SVN_CHANGES_FG: u8 = REPO_DIRTY_FG;
pub const SVN_CHANGES_BG: u8 = REPO_DIRTY_BG;

pub const VIRTUAL_ENV_FG: u8 = 2;
pub const VIRTUAL_ENV_BG: u8 = 0;

// ============================================================================
// Markers
// ============================================================================

/// Shown by the read-only segment
pub const LOCK: &str = "RO";

/// Shown by the ssh segment
pub const NETWORK: &str = "SSH";

/// Replaces leading path components dropped by the depth limit
pub const ELLIPSIS: &str = "..";

// ============================================================================
// Diagnostic styles (stderr)
// ============================================================================

/// Warning style (yellow) - use as `{WARNING}text{WARNING:#}`
pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
