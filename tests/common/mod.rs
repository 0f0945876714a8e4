use std::path::{Path, PathBuf};
use std::process::Command;

use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

/// Snapshot settings for prompt output.
///
/// `root` becomes `[ROOT]`; color escapes become `[fgN]`, `[bgN]`, and `[reset]`.
pub fn prompt_settings(root: &Path) -> Settings {
    let mut settings = Settings::clone_current();
    settings.add_filter(&regex::escape(root.to_str().unwrap()), "[ROOT]");
    settings.add_filter(r"\x1b\[38;5;(\d+)m", "[fg$1]");
    settings.add_filter(r"\x1b\[48;5;(\d+)m", "[bg$1]");
    settings.add_filter(r"\x1b\[0m", "[reset]");
    settings
}

/// A scratch directory with its own HOME, so no user config leaks in.
pub struct TestDir {
    temp_dir: TempDir,
    root: PathBuf,
}

impl TestDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("work");
        std::fs::create_dir(&root).expect("Failed to create work directory");
        // Canonicalize to resolve symlinks (important on macOS where /var is symlink to /private/var)
        let root = root
            .canonicalize()
            .expect("Failed to canonicalize temp path");
        std::fs::create_dir(temp_dir.path().join("home")).expect("Failed to create home");
        Self { temp_dir, root }
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    pub fn home_path(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// `powerprompt` running in `cwd`, with a minimal environment.
    pub fn prompt_command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(get_cargo_bin("powerprompt"));
        cmd.env_clear()
            .current_dir(cwd)
            .env("PWD", cwd)
            .env("HOME", self.home_path())
            .env("PATH", std::env::var_os("PATH").unwrap_or_default())
            .env(
                "POWERPROMPT_CONFIG_PATH",
                self.temp_dir.path().join("no-config.toml"),
            );
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

/// A git repository with an isolated git environment.
pub struct TestRepo {
    dir: TestDir,
}

impl TestRepo {
    /// `git init -b main`, no commits yet
    pub fn new() -> Self {
        let repo = Self { dir: TestDir::new() };
        repo.git(&["init", "-b", "main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo
    }

    /// A repository with one commit on `main`
    pub fn with_commit() -> Self {
        let repo = Self::new();
        repo.commit("README.md", "hello\n");
        repo
    }

    pub fn root_path(&self) -> &Path {
        self.dir.root_path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        self.dir.write_file(name, contents)
    }

    pub fn commit(&self, name: &str, contents: &str) {
        self.write_file(name, contents);
        self.git(&["add", name]);
        self.git(&["commit", "-m", &format!("Add {name}")]);
    }

    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.root_path())
            .env("GIT_CONFIG_GLOBAL", "/dev/null")
            .env("GIT_CONFIG_SYSTEM", "/dev/null")
            .env("GIT_AUTHOR_DATE", "2025-01-01T00:00:00Z")
            .env("GIT_COMMITTER_DATE", "2025-01-01T00:00:00Z")
            .env("LC_ALL", "C")
            .env("LANG", "C")
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn prompt_command(&self) -> Command {
        self.dir.prompt_command(self.root_path())
    }
}
