//! Tests for CLI argument handling that exit before the terminal UI starts.

use std::process::Command;

fn splash_cmd(dir: &std::path::Path) -> Command {
    let config = dir.join("config.toml");
    std::fs::write(&config, "").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feathers-splash"));
    cmd.arg("--log-file").arg(dir.join("splash.log"));
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn help_lists_simulation_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let output = splash_cmd(dir.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--simulate"));
    assert!(stdout.contains("offline"));
}

#[test]
fn invalid_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = splash_cmd(dir.path())
        .arg("not-a-url")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http:// or https://"), "{}", stderr);
}

#[test]
fn missing_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = splash_cmd(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No URL given"), "{}", stderr);
}

#[test]
fn missing_config_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_feathers-splash"))
        .arg("--log-file")
        .arg(dir.path().join("splash.log"))
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("https://example.org")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.toml"), "{}", stderr);
}
