//! Command-line interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn write_input(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let input = dir.path().join("input.ndjson");
    let lines = [
        r#"{"path": "gs://b/cat.jpg", "response": {"labelAnnotations": [{"mid": "/m/01yrx", "description": "cat", "score": 0.98, "topicality": 0.98}]}}"#,
        r#"{"path": "gs://b/broken.jpg", "response": {"error": {"message": "bad image"}}}"#,
    ];
    fs::write(&input, lines.join("\n")).unwrap();
    input
}

#[test]
fn test_project_splits_channels() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("out.ndjson");
    let errors = dir.path().join("errors.ndjson");

    Command::cargo_bin("ocular")
        .unwrap()
        .args(["project", "--feature", "LABEL_DETECTION", "--field", "labels"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--errors")
        .arg(&errors)
        .assert()
        .success();

    let emitted = fs::read_to_string(&output).unwrap();
    assert_eq!(emitted.lines().count(), 1);
    let record: serde_json::Value = serde_json::from_str(emitted.lines().next().unwrap()).unwrap();
    assert_eq!(record["path"], "gs://b/cat.jpg");
    assert_eq!(record["labels"][0]["description"], "cat");

    let failed = fs::read_to_string(&errors).unwrap();
    assert_eq!(failed.lines().count(), 1);
    let record: serde_json::Value = serde_json::from_str(failed.lines().next().unwrap()).unwrap();
    assert_eq!(record["path"], "gs://b/broken.jpg");
    assert!(record["error"].as_str().unwrap().contains("bad image"));
}

#[test]
fn test_project_with_configured_schema() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("out.ndjson");
    let errors = dir.path().join("errors.ndjson");
    let schema = dir.path().join("schema.json");
    fs::write(
        &schema,
        r#"{
            "type": "record", "name": "Output", "fields": [
                {"name": "labels", "type": ["null", {"type": "array", "items": ["null", {
                    "type": "record", "name": "Label", "fields": [
                        {"name": "description", "type": ["null", "string"]}
                    ]
                }]}]}
            ]
        }"#,
    )
    .unwrap();

    Command::cargo_bin("ocular")
        .unwrap()
        .args(["project", "--feature", "LABEL_DETECTION", "--field", "labels"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--errors")
        .arg(&errors)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success();

    let emitted = fs::read_to_string(&output).unwrap();
    let record: serde_json::Value = serde_json::from_str(emitted.lines().next().unwrap()).unwrap();
    // The schema declares no path field, so nothing passes through
    assert!(record.get("path").is_none());
    assert_eq!(record["labels"], serde_json::json!([{"description": "cat"}]));
}

#[test]
fn test_unknown_feature_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);

    Command::cargo_bin("ocular")
        .unwrap()
        .args(["project", "--feature", "BARCODE_DETECTION", "--field", "out"])
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.ndjson"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("BARCODE_DETECTION"));
}

#[test]
fn test_schema_prints_inferred_shape() {
    Command::cargo_bin("ocular")
        .unwrap()
        .args(["schema", "--feature", "SAFE_SEARCH_DETECTION", "--field", "safe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"adult\"").and(predicate::str::contains("\"path\"")));
}

#[test]
fn test_validate_reports_offending_field() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("schema.json");
    fs::write(
        &schema,
        r#"{
            "type": "record", "name": "Output", "fields": [
                {"name": "labels", "type": ["null", {"type": "array", "items": ["null", {
                    "type": "record", "name": "Label", "fields": [
                        {"name": "score", "type": ["null", "string"]}
                    ]
                }]}]}
            ]
        }"#,
    )
    .unwrap();

    Command::cargo_bin("ocular")
        .unwrap()
        .args(["validate", "--feature", "LABEL_DETECTION", "--field", "labels"])
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .stderr(predicate::str::contains("labels.score"));
}
