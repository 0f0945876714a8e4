use std::process::Command;

use insta_cmd::assert_cmd_snapshot;

use crate::common::{TestDir, TestRepo, prompt_settings};

/// The git segment alone, bare escapes.
fn git_prompt(repo: &TestRepo) -> Command {
    let mut cmd = repo.prompt_command();
    cmd.args(["--shell", "bare", "--segments", "git"]);
    cmd
}

#[test]
fn test_clean_branch() {
    let repo = TestRepo::with_commit();
    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(git_prompt(&repo), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg14][bg0](main[bg0][fg2][fg14][bg0])[reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_dirty_counts() {
    let repo = TestRepo::with_commit();
    repo.write_file("README.md", "changed\n");
    repo.git(&["add", "README.md"]);
    repo.write_file("new.txt", "new\n");
    repo.write_file("other.txt", "other\n");

    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(git_prompt(&repo), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg9][bg0](main[bg0][fg2][fg9][bg0] staged[bg0][fg2][fg9][bg0] 2?[bg0][fg2][fg9][bg0])[reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_unstaged_change() {
    let repo = TestRepo::with_commit();
    repo.write_file("README.md", "changed\n");
    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(git_prompt(&repo), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg9][bg0](main[bg0][fg2][fg9][bg0] +[bg0][fg2][fg9][bg0])[reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_ahead_of_upstream_is_still_clean() {
    let repo = TestRepo::with_commit();
    repo.git(&["branch", "base"]);
    repo.git(&["branch", "--set-upstream-to=base"]);
    repo.commit("one.txt", "1\n");
    repo.commit("two.txt", "2\n");

    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(git_prompt(&repo), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg14][bg0](main[bg0][fg2][fg14][bg0] 2↑[bg0][fg2][fg14][bg0])[reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_detached_head() {
    let repo = TestRepo::with_commit();
    repo.git(&["checkout", "--detach"]);
    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(git_prompt(&repo), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg14][bg0](HEAD detached[bg0][fg2][fg14][bg0])[reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_repository_without_commits() {
    let repo = TestRepo::new();
    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(git_prompt(&repo), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg14][bg0](Big Bang[bg0][fg2][fg14][bg0])[reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_outside_repository_adds_nothing() {
    let dir = TestDir::new();
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.args(["--shell", "bare", "--segments", "git"]);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_git_missing_from_path_adds_nothing() {
    let repo = TestRepo::with_commit();
    let empty_bin = tempfile::tempdir().unwrap();
    let mut cmd = git_prompt(&repo);
    cmd.env("PATH", empty_bin.path());
    prompt_settings(repo.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [reset] 
        ----- stderr -----
        ");
    });
}
