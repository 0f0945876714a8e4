pub mod config;
pub mod path;
pub mod prompt;
pub mod segments;
pub mod shell;
pub mod shell_exec;
pub mod styling;
pub mod vcs;
