//! Working-directory resolution and path shortening.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::styling::ELLIPSIS;

/// The directory the prompt describes.
///
/// `reported` is what the shell believes (usually `$PWD`) and is what gets
/// displayed. `valid` is the nearest ancestor that still exists on disk; tools
/// run there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir {
    pub reported: String,
    pub valid: PathBuf,
}

impl WorkingDir {
    /// True when the reported directory no longer exists.
    pub fn is_stale(&self) -> bool {
        Path::new(&self.reported) != self.valid
    }
}

/// No usable working directory could be determined.
#[derive(Debug)]
pub struct CwdError {
    source: std::io::Error,
}

impl std::fmt::Display for CwdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Your current directory is invalid: {}", self.source)
    }
}

impl std::error::Error for CwdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Resolve the working directory.
///
/// `$PWD` is preferred over [`std::env::current_dir`] because the latter
/// resolves symlinks and can disagree with the shell. When the directory is
/// gone (e.g. removed by a branch checkout) we walk up to the closest existing
/// ancestor but keep reporting the original path.
pub fn resolve_working_dir(pwd: Option<&str>) -> Result<WorkingDir, CwdError> {
    let reported = match pwd.filter(|p| !p.is_empty()) {
        Some(pwd) => pwd.to_string(),
        None => std::env::current_dir()
            .map_err(|source| CwdError { source })?
            .to_string_lossy()
            .into_owned(),
    };

    let valid = lowest_existing_ancestor(&reported);
    let working_dir = WorkingDir { reported, valid };
    if working_dir.is_stale() {
        log::debug!(
            "Working directory {} is missing, using {}",
            working_dir.reported,
            working_dir.valid.display()
        );
    }
    Ok(working_dir)
}

/// Drop trailing components of `path` until what remains exists.
fn lowest_existing_ancestor(path: &str) -> PathBuf {
    let mut parts: Vec<&str> = path.split(MAIN_SEPARATOR).collect();
    let mut up = path.to_string();
    while !parts.is_empty() && !Path::new(&up).exists() {
        parts.pop();
        up = parts.join(&MAIN_SEPARATOR.to_string());
    }
    if up.is_empty() {
        PathBuf::from(MAIN_SEPARATOR.to_string())
    } else {
        PathBuf::from(up)
    }
}

/// Replace a leading home directory with `~`.
///
/// Only whole components match: `/home/al` is not a prefix of `/home/alice`.
pub fn replace_home_dir(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.map(|h| h.trim_end_matches(MAIN_SEPARATOR)) else {
        return path.to_string();
    };
    if home.is_empty() {
        return path.to_string();
    }
    match path.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with(MAIN_SEPARATOR) => format!("~{rest}"),
        _ => path.to_string(),
    }
}

/// Split a (home-replaced) path into display names.
///
/// The leading root is dropped, and the filesystem root itself becomes `/`.
pub fn split_path_into_names(path: &str) -> Vec<String> {
    let trimmed = path.trim_end_matches(MAIN_SEPARATOR);
    let trimmed = trimmed.strip_prefix(MAIN_SEPARATOR).unwrap_or(trimmed);
    if trimmed.is_empty() {
        return vec![MAIN_SEPARATOR.to_string()];
    }
    trimmed
        .split(MAIN_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Keep the last `max_depth` names behind an ellipsis when the path is deeper.
///
/// The first name (home marker or top directory) doesn't count toward the
/// depth. A depth of zero disables the limit.
pub fn limit_depth(names: Vec<String>, max_depth: usize) -> Vec<String> {
    if max_depth == 0 || names.len().saturating_sub(1) <= max_depth {
        return names;
    }
    let tail = names[names.len() - max_depth..].iter().cloned();
    std::iter::once(ELLIPSIS.to_string()).chain(tail).collect()
}

/// Truncate a directory name to `max_chars` characters (0 = no limit).
pub fn shorten_name(name: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        name.to_string()
    } else {
        name.chars().take(max_chars).collect()
    }
}
