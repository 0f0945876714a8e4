//! Consolidated styling module.
//!
//! Two kinds of output live here:
//! - the prompt palette and separator glyphs, consumed by the renderer
//! - diagnostics for the user, written to stderr through anstream so they
//!   respect NO_COLOR, CLICOLOR_FORCE, and terminal capabilities

mod constants;

pub use constants::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Separator glyphs
// ============================================================================

/// Glyph set used between segments.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SeparatorMode {
    /// Plain ASCII: no arrow between blocks, `/` between path components
    #[default]
    Compatible,
    /// Powerline glyphs (needs a patched font)
    Patched,
    /// No separators at all
    Flat,
}

impl SeparatorMode {
    /// Separator drawn after most segments
    pub fn separator(self) -> &'static str {
        match self {
            SeparatorMode::Compatible => "",
            SeparatorMode::Patched => "\u{E0B0}",
            SeparatorMode::Flat => "",
        }
    }

    /// Separator drawn between path components
    pub fn separator_thin(self) -> &'static str {
        match self {
            SeparatorMode::Compatible => "/",
            SeparatorMode::Patched => "\u{E0B1}",
            SeparatorMode::Flat => "",
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Print a non-fatal warning to stderr.
///
/// Stdout is reserved for the prompt string, so warnings never go there.
pub fn warn(message: impl std::fmt::Display) {
    eprintln!("{WARNING}[powerprompt] {message}{WARNING:#}");
}

/// Print an error to stderr.
pub fn error(message: impl std::fmt::Display) {
    eprintln!("{ERROR}[powerprompt] {message}{ERROR:#}");
}
