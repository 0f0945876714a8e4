use std::path::PathBuf;

use clap::{ArgAction, Parser};

use powerprompt::config::{CwdMode, PromptConfig};
use powerprompt::segments::SegmentKind;
use powerprompt::shell::Shell;
use powerprompt::styling::SeparatorMode;

/// Print a powerline-style prompt for bash, zsh, or any other shell.
///
/// Call it from the shell's prompt hook with the last exit status, e.g.
/// `PS1="$(powerprompt $?)"`.
#[derive(Parser, Debug)]
#[command(name = "powerprompt", version, about, long_about = None)]
pub struct Cli {
    /// Exit code of the previous command
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    pub prev_error: i32,

    /// Config file (default: ~/.config/powerprompt/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shell the escapes are written for
    #[arg(long, value_enum)]
    pub shell: Option<Shell>,

    /// Separator glyph set
    #[arg(long, value_enum)]
    pub mode: Option<SeparatorMode>,

    /// How the working directory is shown
    #[arg(long, value_enum)]
    pub cwd_mode: Option<CwdMode>,

    /// Directories shown before eliding with `..` (0 keeps all)
    #[arg(long, value_name = "N")]
    pub cwd_max_depth: Option<usize>,

    /// Characters kept per directory name (0 keeps all)
    #[arg(long, value_name = "N")]
    pub cwd_max_dir_size: Option<usize>,

    /// Segments to draw, in order
    #[arg(long, value_enum, value_delimiter = ',')]
    pub segments: Option<Vec<SegmentKind>>,

    /// Timeout for each version-control command
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags win over the config file.
    pub fn apply(&self, config: &mut PromptConfig) {
        if let Some(shell) = self.shell {
            config.shell = shell;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(cwd_mode) = self.cwd_mode {
            config.cwd.mode = cwd_mode;
        }
        if let Some(depth) = self.cwd_max_depth {
            config.cwd.max_depth = depth;
        }
        if let Some(size) = self.cwd_max_dir_size {
            config.cwd.max_dir_size = size;
        }
        if let Some(segments) = &self.segments {
            config.segments = segments.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.vcs.timeout_ms = timeout_ms;
        }
    }
}
