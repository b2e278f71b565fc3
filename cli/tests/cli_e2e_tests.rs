//! CLI end-to-end tests that run the binary against the shared fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/fixtures");

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("visual-transcoder").expect("binary should exist")
}

fn fixture_names() -> Vec<&'static str> {
    vec!["bar_chart", "sheet", "empty_visual"]
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).expect("file should be valid JSON")
}

// ── E2E: Expand+Flatten via CLI ─────────────────────────────────────────────

#[test]
fn test_cli_e2e_expand_then_flatten() {
    let dir = TempDir::new().unwrap();

    for name in fixture_names() {
        let input = format!("{FIXTURES_DIR}/{name}.json");
        let typed = dir.path().join(format!("{name}.typed.json"));
        let flattened = dir.path().join(format!("{name}.flat.json"));

        cmd()
            .args(["expand", &input])
            .args(["-o", typed.to_str().unwrap()])
            .assert()
            .success();

        cmd()
            .args(["flatten", typed.to_str().unwrap()])
            .args(["-o", flattened.to_str().unwrap()])
            .assert()
            .success();

        let original = read_json(std::path::Path::new(&input));
        let output = read_json(&flattened);
        let items = output.as_array().expect("flatten writes an array");
        let expected = match &original {
            serde_json::Value::Array(visuals) => visuals.len(),
            _ => 1,
        };
        assert_eq!(items.len(), expected, "visual count for {name}");
    }
}

// ── E2E: Roundtrip ──────────────────────────────────────────────────────────

#[test]
fn test_cli_e2e_roundtrip_fixtures_are_lossless() {
    for name in fixture_names() {
        cmd()
            .args(["roundtrip", &format!("{FIXTURES_DIR}/{name}.json")])
            .args(["--format", "compact"])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_e2e_roundtrip_reports_drift() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("lossy.json");
    let visual = serde_json::json!({ "bar_chart_visual": [{ "visual_id": "v", "title": "oops" }] });
    fs::write(&input, visual.to_string()).unwrap();

    cmd()
        .args(["roundtrip", input.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"visual_id\": \"v\""))
        .stderr(predicate::str::contains("Roundtrip is lossy"));
}

// ── E2E: Validate ───────────────────────────────────────────────────────────

#[test]
fn test_cli_e2e_validate_clean_fixture() {
    cmd()
        .args(["validate", &format!("{FIXTURES_DIR}/empty_visual.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_cli_e2e_validate_invalid_fixture() {
    let assert = cmd()
        .args(["validate", &format!("{FIXTURES_DIR}/invalid_visual.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation warning(s)"));

    let warnings: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("warnings should be valid JSON");
    let paths: Vec<&str> = warnings
        .as_array()
        .expect("warnings are an array")
        .iter()
        .filter_map(|w| w["data_path"].as_str())
        .collect();
    assert!(paths.contains(&"/bar_chart_visual/0/visual_id"));
    assert!(paths.contains(&"/"));
}
