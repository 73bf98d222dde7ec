//! CLI integration tests.
//!
//! Each test points HOME at a fresh temp directory so the real user config
//! never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studymate(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studymate").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_describes_the_tool() {
    let home = TempDir::new().unwrap();
    studymate(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("study companion"));
}

#[test]
fn apps_json_lists_default_roster() {
    let home = TempDir::new().unwrap();
    let output = studymate(&home)
        .args(["apps", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["count"], 8);
    assert_eq!(value["blocked"], 3);
    assert_eq!(value["study_mode"], false);
    assert_eq!(value["apps"][0]["name"], "Facebook");
    assert_eq!(value["apps"][0]["blocked"], false);
}

#[test]
fn apps_toggle_flips_one_flag() {
    let home = TempDir::new().unwrap();
    let output = studymate(&home)
        .args(["apps", "--toggle", "0", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["apps"][0]["blocked"], true);
    assert_eq!(value["blocked"], 4);
}

#[test]
fn apps_study_mode_blocks_everything() {
    let home = TempDir::new().unwrap();
    let output = studymate(&home)
        .args(["apps", "--study-mode", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["study_mode"], true);
    assert_eq!(value["blocked"], 8);
}

#[test]
fn apps_toggle_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    studymate(&home)
        .args(["apps", "--toggle", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn sessions_summarizes_completion() {
    let home = TempDir::new().unwrap();
    studymate(&home)
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 4 sessions completed"));
}

#[test]
fn chat_one_shot_prints_a_reply() {
    let home = TempDir::new().unwrap();

    // Shrink the reply latency via config so the test stays fast; this also
    // exercises config loading end to end.
    let root = home.path().join(".studymate");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "chat:\n  reply_delay_ms: 10\n").unwrap();

    studymate(&home)
        .args(["chat", "--message", "explain fractions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assistant:"));
}

#[test]
fn chat_blank_message_is_a_noop() {
    let home = TempDir::new().unwrap();
    studymate(&home)
        .args(["chat", "--message", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to send"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    studymate(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studymate"));
}
