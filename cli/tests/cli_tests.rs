//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("visual-transcoder").expect("binary should exist")
}

fn simple_visual() -> String {
    serde_json::json!({
        "bar_chart_visual": [{
            "visual_id": "sales",
            "title": [{ "visibility": "VISIBLE", "format_text": [{ "plain_text": "Sales" }] }]
        }]
    })
    .to_string()
}

// ── Expand to File ──────────────────────────────────────────────────────────

#[test]
fn test_expand_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("visual.json");
    let output = dir.path().join("typed.json");
    fs::write(&input, simple_visual()).unwrap();

    cmd()
        .args(["expand", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&output).expect("output file should exist");
    let typed: serde_json::Value =
        serde_json::from_str(&content).expect("output should be valid JSON");
    assert_eq!(typed[0]["BarChartVisual"]["VisualId"], "sales");
}

// ── Expand to Stdout ────────────────────────────────────────────────────────

#[test]
fn test_expand_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("visual.json");
    fs::write(&input, simple_visual()).unwrap();

    cmd()
        .args(["expand", input.to_str().unwrap(), "--format", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"PlainText\":\"Sales\""));
}

// ── Flatten ─────────────────────────────────────────────────────────────────

#[test]
fn test_flatten_single_typed_visual() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("typed.json");
    let typed = serde_json::json!({ "EmptyVisual": { "VisualId": "e", "DataSetIdentifier": "d" } });
    fs::write(&input, typed.to_string()).unwrap();

    let assert = cmd().args(["flatten", input.to_str().unwrap()]).assert().success();
    let data: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("stdout should be valid JSON");
    assert_eq!(
        data,
        serde_json::json!([{
            "empty_visual": [{ "visual_id": "e", "data_set_identifier": "d" }]
        }])
    );
}

#[test]
fn test_flatten_rejects_untyped_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("visual.json");
    fs::write(&input, simple_visual()).unwrap();

    cmd()
        .args(["flatten", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse typed visuals"));
}

// ── Modes ───────────────────────────────────────────────────────────────────

#[test]
fn test_strict_mode_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("visual.json");
    let visual = serde_json::json!({
        "empty_visual": [{ "visual_id": "e", "data_set_identifier": "d", "bogus": 1 }]
    });
    fs::write(&input, visual.to_string()).unwrap();

    cmd()
        .args(["expand", input.to_str().unwrap(), "--mode", "lenient"])
        .assert()
        .success();

    cmd()
        .args(["expand", input.to_str().unwrap(), "--mode", "strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expansion failed"));
}

#[test]
fn test_warn_mode_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("visual.json");
    let visual = serde_json::json!({
        "empty_visual": [{ "visual_id": "e", "data_set_identifier": "d", "bogus": 1 }]
    });
    fs::write(&input, visual.to_string()).unwrap();

    cmd()
        .args(["expand", input.to_str().unwrap(), "--mode", "warn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EmptyVisual"))
        .stderr(predicate::str::contains("/empty_visual/0/bogus"));
}

#[test]
fn test_max_visuals_flag() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sheet.json");
    let sheet = serde_json::json!([
        { "empty_visual": [{ "visual_id": "a" }] },
        { "empty_visual": [{ "visual_id": "b" }] }
    ]);
    fs::write(&input, sheet.to_string()).unwrap();

    cmd()
        .args(["expand", input.to_str().unwrap(), "--max-visuals", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expansion failed"));
}

// ── Invalid Input ───────────────────────────────────────────────────────────

#[test]
fn test_invalid_input() {
    cmd()
        .args(["expand", "/nonexistent/path/visual.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_non_object_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("visual.json");
    fs::write(&input, "[1, 2]").unwrap();

    cmd()
        .args(["expand", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/0"));
}

// ── Help Output ─────────────────────────────────────────────────────────────

#[test]
fn test_help_output() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("flatten"))
        .stdout(predicate::str::contains("roundtrip"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_expand_help() {
    cmd()
        .args(["expand", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--max-visuals"))
        .stdout(predicate::str::contains("--format"));
}
