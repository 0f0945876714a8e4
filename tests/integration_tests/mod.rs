pub mod git_segment;
pub mod prompt;
