//! CLI integration tests

use std::process::Command;

fn voice_chef_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voice-chef"))
}

#[test]
fn help_output() {
    let output = voice_chef_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("recipe"));
    assert!(stdout.contains("--text"));
    assert!(stdout.contains("--mic"));
    assert!(stdout.contains("--duration"));
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("--speak"));
    assert!(stdout.contains("--no-speak"));
}

#[test]
fn version_output() {
    let output = voice_chef_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voice-chef"));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voice-chef"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = voice_chef_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_set_and_get_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "language", "french"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "language"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("french"));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "keystroke", "true"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key") || stderr.contains("keystroke"),
        "Expected unknown-key error, got: {}",
        stderr
    );
}

#[test]
fn config_rejects_invalid_language_value() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "language", "klingon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn invalid_duration_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("GEMINI_API_KEY", "test-key")
        .args(["--mic", "--duration", "invalid"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid duration") || stderr.contains("invalid"),
        "Expected error about invalid duration, got: {}",
        stderr
    );
}

#[test]
fn duration_over_cap_is_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("GEMINI_API_KEY", "test-key")
        .args(["--mic", "--duration", "30s"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("capped"),
        "Expected cap error, got: {}",
        stderr
    );
}

#[test]
fn duration_requires_mic() {
    let output = voice_chef_bin()
        .args(["--duration", "5s"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn speak_flags_conflict() {
    let output = voice_chef_bin()
        .args(["--speak", "--no-speak"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn invalid_language_error() {
    let output = voice_chef_bin()
        .args(["--language", "klingon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid") || stderr.contains("Invalid"),
        "Expected error about invalid language, got: {}",
        stderr
    );
}

#[test]
fn missing_api_key_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = voice_chef_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("GEMINI_API_KEY")
        .args(["--text", "tomato, onion"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing API key"),
        "Expected missing-key error, got: {}",
        stderr
    );
}

// Note: Runs with a valid key and query are covered by the mocked pipeline
// tests; invoking them here would hit the live Gemini endpoint
