use std::process::Command;

use insta_cmd::{assert_cmd_snapshot, get_cargo_bin};

use crate::common::{TestDir, prompt_settings};

#[test]
fn test_default_segments_under_home() {
    let dir = TestDir::new();
    let deep = dir.home_path().join("a/b/c/d");
    std::fs::create_dir_all(&deep).unwrap();

    let mut cmd = dir.prompt_command(&deep);
    cmd.args(["--shell", "bare"]);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg13][bg0][[bg0][fg2][fg3][bg0]..[bg0][fg14]/[fg3][bg0]b[bg0][fg14]/[fg3][bg0]c[bg0][fg14]/[fg3][bg0]d[bg0][fg2][fg13][bg0]][reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_bash_escapes_are_wrapped() {
    let dir = TestDir::new();
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.args(["--shell", "bash", "--segments", "begin-wrap"]);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        \[\e[38;5;13m\]\[\e[48;5;0m\][\[\e[0m\]\[\e[38;5;2m\]\[\e[0m\] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_zsh_escapes_are_wrapped() {
    let dir = TestDir::new();
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.args(["--shell", "zsh", "--segments", "end-wrap"]);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        %{[fg13]%}%{[bg0]%}]%{[reset]%}%{[fg2]%}%{[reset]%} 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_failed_command_status() {
    let dir = TestDir::new();
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.args(["2", "--shell", "bare", "--segments", "exit-code,root"]);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg0][bg1] 2 [bg1][fg2][fg0][bg1] $ [reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_missing_directory_falls_back_to_ancestor() {
    let dir = TestDir::new();
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.env("PWD", dir.root_path().join("gone/deeper")).args([
        "--shell",
        "bare",
        "--segments",
        "cwd",
        "--cwd-mode",
        "plain",
    ]);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg3][bg0][ROOT]/gone/deeper[reset][fg2][reset] 
        ----- stderr -----
        [powerprompt] Your current directory is invalid. Lowest valid directory: [ROOT]
        ");
    });
}

/// Neither `$PWD` nor the OS can name the directory.
#[test]
#[cfg(unix)]
fn test_unresolvable_directory_exits_with_error() {
    let dir = TestDir::new();
    let doomed = dir.root_path().join("doomed");
    std::fs::create_dir(&doomed).unwrap();

    let output = Command::new("sh")
        .env_clear()
        .env("PATH", std::env::var_os("PATH").unwrap_or_default())
        .env("HOME", dir.home_path())
        .env("POWERPROMPT_CONFIG_PATH", dir.root_path().join("no-config.toml"))
        .env("DOOMED", &doomed)
        .env("POWERPROMPT_BIN", get_cargo_bin("powerprompt"))
        .args([
            "-c",
            r#"cd "$DOOMED" && rmdir "$DOOMED" && unset PWD && exec "$POWERPROMPT_BIN" --shell bare"#,
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("[powerprompt] Your current directory is invalid: "),
        "stdout: {stdout:?}"
    );
    assert!(stdout.ends_with("\n> "), "stdout: {stdout:?}");
}

#[test]
fn test_config_file_is_applied() {
    let dir = TestDir::new();
    let config = dir.write_file(
        "config.toml",
        "shell = \"bare\"\nsegments = [\"exit-code\"]\n",
    );
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.env("POWERPROMPT_CONFIG_PATH", &config).arg("3");
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg0][bg1] 3 [reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_flags_override_config_file() {
    let dir = TestDir::new();
    let config = dir.write_file("config.toml", "segments = [\"exit-code\"]\n");
    let mut cmd = dir.prompt_command(dir.root_path());
    cmd.args(["3", "--shell", "bare", "--segments", "root", "--config"])
        .arg(&config);
    prompt_settings(dir.root_path()).bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [fg0][bg1] $ [reset][fg2][reset] 
        ----- stderr -----
        ");
    });
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TestDir::new();
    let config = dir.write_file("config.toml", "segments = [\"weather\"]\n");
    let output = dir
        .prompt_command(dir.root_path())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid config file"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help() {
    let dir = TestDir::new();
    let output = dir
        .prompt_command(dir.root_path())
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--segments"));
}
