//! Integration tests for the command-line interface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture;

/// Run lottie-scrub with an isolated (missing) config file.
fn cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lottie-scrub").expect("binary built");
    cmd.env("LOTTIE_SCRUB_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Run lottie-scrub and format its output for a snapshot.
fn snapshot_output(title: &str, args: &[&str]) -> String {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir).args(args).output().expect("Failed to execute lottie-scrub");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!(
        "=== {} ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        title,
        output.status.code().unwrap_or(-1),
        stdout,
        stderr
    )
    .trim_end()
    .to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn snapshot_cli_help() {
    let output = snapshot_output("lottie-scrub --help", &["--help"]);
    insta::with_settings!({prepend_module_to_snapshot => false}, {
        insta::assert_snapshot!("cli_help", output);
    });
}

#[test]
fn version_flag_prints_version() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn info_prints_segment_table() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("info")
        .arg(fixture("three_segments.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames    40 @ 30 fps"))
        .stdout(predicate::str::contains("Size      320x240"))
        .stdout(predicate::str::contains("Segments  3"))
        .stdout(predicate::str::contains("goodbye"));
}

#[test]
fn snapshot_cli_info_three_segments() {
    let file = fixture("three_segments.json");
    let file = file.to_string_lossy();
    let output = snapshot_output(
        &format!("lottie-scrub info {}", file),
        &["info", &*file],
    );
    insta::with_settings!({
        prepend_module_to_snapshot => false,
        filters => vec![
            (r"\S*three_segments\.json", "[FILE]"),
            (r"\(\d+(\.\d+)? (B|KiB|MiB)\)", "[SIZE]"),
        ]
    }, {
        insta::assert_snapshot!("cli_info_three_segments", output);
    });
}

#[test]
fn info_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["info", "--json"])
        .arg(fixture("three_segments.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["animation"]["total_frames"], 40);
    assert_eq!(value["animation"]["name"], "wave");
    let segments = value["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2]["start_frame"], 20);
    assert_eq!(segments[2]["position"], 20.0);
}

#[test]
fn info_rejects_odd_markers() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("info")
        .arg(fixture("odd_markers.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed markers"));
}

#[test]
fn info_rejects_non_json() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("info")
        .arg(fixture("not_json.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not_json.txt"));
}

// ============================================================================
// Config and completions
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("tick_rate_ms = 33"));
}

#[test]
fn invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[player]\nscrub_step = 2.0\n",
    )
    .unwrap();
    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scrub_step"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lottie-scrub"));
}

#[test]
fn play_refuses_without_terminal() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("play")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
