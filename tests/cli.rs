//! Integration tests for the mindful CLI.
//!
//! The interactive timer itself needs a terminal, so these tests cover
//! the non-interactive commands only.

use assert_cmd::Command;
use predicates::prelude::*;

fn mindful() -> Command {
    Command::cargo_bin("mindful").unwrap()
}

#[test]
fn presets_lists_all_four() {
    mindful()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Calm"))
        .stdout(predicate::str::contains("Deep Focus"))
        .stdout(predicate::str::contains("Stress Relief"))
        .stdout(predicate::str::contains("Full Session"));
}

#[test]
fn presets_json_output_is_valid() {
    let output = mindful()
        .args(["presets", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let presets = value["presets"].as_array().unwrap();
    assert_eq!(presets.len(), 4);
    assert_eq!(presets[1]["duration_minutes"], 10);
}

#[test]
fn start_rejects_unknown_preset() {
    mindful()
        .args(["start", "--preset", "Power Nap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset"));
}

#[test]
fn start_rejects_unknown_duration() {
    mindful()
        .args(["start", "--minutes", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No preset is 7 minutes long"));
}

#[test]
fn start_preset_conflicts_with_minutes() {
    mindful()
        .args(["start", "-p", "Quick Calm", "-m", "10"])
        .assert()
        .failure();
}

#[test]
fn completions_emit_script() {
    mindful()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mindful"));
}

#[test]
fn help_mentions_breathing_guide() {
    mindful()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("meditation timer"));
}
