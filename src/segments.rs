//! Segment assembly pipeline.
//!
//! The configured list of [`SegmentKind`]s runs in order against one shared
//! [`PromptContext`]. Each producer appends zero or more segments; none may
//! fail the prompt. A producer that can't get its data appends nothing.

mod cwd;
mod session;
mod status;
mod vcs;
mod wrap;

pub use vcs::append_git_status;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::PromptConfig;
use crate::path::WorkingDir;
use crate::prompt::Prompt;
use crate::vcs::VcsRunner;

/// Registered segment producers, named as in configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SegmentKind {
    BeginWrap,
    VirtualEnv,
    Ssh,
    ReadOnly,
    Username,
    Hostname,
    Cwd,
    Git,
    Hg,
    Svn,
    Fossil,
    ExitCode,
    Root,
    EndWrap,
}

type Producer = fn(&PromptContext, &mut Prompt);

impl SegmentKind {
    /// Used when the configuration doesn't list segments
    pub const DEFAULT_ORDER: [SegmentKind; 4] = [
        SegmentKind::BeginWrap,
        SegmentKind::Cwd,
        SegmentKind::Git,
        SegmentKind::EndWrap,
    ];

    fn producer(self) -> Producer {
        match self {
            SegmentKind::BeginWrap => wrap::begin,
            SegmentKind::VirtualEnv => session::virtual_env,
            SegmentKind::Ssh => session::ssh,
            SegmentKind::ReadOnly => cwd::read_only,
            SegmentKind::Username => session::username,
            SegmentKind::Hostname => session::hostname,
            SegmentKind::Cwd => cwd::cwd,
            SegmentKind::Git => vcs::git,
            SegmentKind::Hg => vcs::hg,
            SegmentKind::Svn => vcs::svn,
            SegmentKind::Fossil => vcs::fossil,
            SegmentKind::ExitCode => status::exit_code,
            SegmentKind::Root => status::root,
            SegmentKind::EndWrap => wrap::end,
        }
    }
}

/// Environment variables read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    pub pwd: Option<String>,
    pub home: Option<String>,
    pub path: Option<String>,
    pub user: Option<String>,
    pub ssh_client: Option<String>,
    pub virtual_env: Option<String>,
    pub conda_env_path: Option<String>,
    /// Short host name (not an env var, but just as static)
    pub hostname: Option<String>,
}

impl Env {
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self {
            pwd: var("PWD"),
            home: var("HOME"),
            path: var("PATH"),
            user: var("USER"),
            ssh_client: var("SSH_CLIENT"),
            virtual_env: var("VIRTUAL_ENV"),
            conda_env_path: var("CONDA_ENV_PATH"),
            hostname: short_hostname(),
        }
    }

    /// Inside an ssh session
    pub fn is_ssh(&self) -> bool {
        self.ssh_client.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(unix)]
fn short_hostname() -> Option<String> {
    let name = nix::unistd::gethostname().ok()?;
    let name = name.to_string_lossy();
    name.split('.').next().map(str::to_string)
}

#[cfg(not(unix))]
fn short_hostname() -> Option<String> {
    std::env::var("COMPUTERNAME").ok()
}

/// Everything a producer may read.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub env: Env,
    pub cwd: WorkingDir,
    pub config: PromptConfig,
    /// Exit code of the previous command
    pub prev_error: i32,
}

impl PromptContext {
    /// Runner for VCS tools in the nearest existing directory.
    pub fn vcs_runner(&self) -> VcsRunner<'_> {
        VcsRunner {
            dir: &self.cwd.valid,
            home: self.env.home.as_deref(),
            path: self.env.path.as_deref(),
            timeout: self.config.vcs.timeout(),
        }
    }
}

/// Run each configured producer in order.
pub fn assemble(ctx: &PromptContext, prompt: &mut Prompt) {
    for &kind in &ctx.config.segments {
        let before = prompt.segments().len();
        (kind.producer())(ctx, prompt);
        log::debug!(
            "Segment {} appended {} block(s)",
            kind,
            prompt.segments().len() - before
        );
    }
}
