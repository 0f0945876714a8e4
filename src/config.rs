//! Prompt configuration.
//!
//! Read from a TOML file, then overridden by command-line flags. Every key is
//! optional; an absent file means all defaults.
//!
//! ```toml
//! shell = "zsh"
//! mode = "patched"
//! segments = ["ssh", "cwd", "git", "exit-code", "root"]
//!
//! [cwd]
//! mode = "dironly"
//! max-depth = 4
//! max-dir-size = 0
//!
//! [vcs]
//! timeout-ms = 500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use config::{Config, ConfigError, File, FileFormat};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use crate::segments::SegmentKind;
use crate::shell::Shell;
use crate::styling::SeparatorMode;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV_VAR: &str = "POWERPROMPT_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PromptConfig {
    pub shell: Shell,
    pub mode: SeparatorMode,
    /// Producers to run, in order
    pub segments: Vec<SegmentKind>,
    pub cwd: CwdConfig,
    pub vcs: VcsConfig,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            shell: Shell::default(),
            mode: SeparatorMode::default(),
            segments: SegmentKind::DEFAULT_ORDER.to_vec(),
            cwd: CwdConfig::default(),
            vcs: VcsConfig::default(),
        }
    }
}

/// How the working directory is shown.
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
pub enum CwdMode {
    /// One segment per directory, thin separators between them
    #[default]
    Fancy,
    /// The whole path as a single segment
    Plain,
    /// Only the last directory
    Dironly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CwdConfig {
    pub mode: CwdMode,
    /// Directories shown after the first one before eliding (0 = ignored)
    pub max_depth: usize,
    /// Characters kept per directory name (0 = no truncation)
    pub max_dir_size: usize,
}

impl Default for CwdConfig {
    fn default() -> Self {
        Self {
            mode: CwdMode::Fancy,
            max_depth: 3,
            max_dir_size: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VcsConfig {
    /// Upper bound for each VCS command, in milliseconds
    pub timeout_ms: u64,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self { timeout_ms: 300 }
    }
}

impl VcsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl PromptConfig {
    /// Load configuration from `path`, if given and present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            log::debug!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }
        builder.build()?.try_deserialize()
    }
}

/// Locate the config file.
///
/// Priority:
/// 1. `--config` flag
/// 2. `POWERPROMPT_CONFIG_PATH` environment variable
/// 3. Platform config dir (`~/.config/powerprompt/config.toml` on Linux and macOS)
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("powerprompt").join("config.toml"))
}
