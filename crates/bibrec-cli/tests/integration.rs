//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn write_fixture(value: &Value) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("records.json");
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    (temp_dir, path.to_string_lossy().to_string())
}

fn run_cli(args: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_bibrec"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    (output.status.code(), stdout, stderr)
}

#[test]
fn test_validate_item_reports_unknown_field() {
    let (_temp_dir, path) = write_fixture(&json!({"itemType": "book", "customField": "x"}));

    let (code, stdout, _) = run_cli(&["validate", "item", &path]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Drifted"));
    assert!(stdout.contains("UnknownFieldPreserved"));
}

#[test]
fn test_validate_item_json_output() {
    let (_temp_dir, path) = write_fixture(&json!({"itemType": "book", "title": "Walden", "customField": "x"}));

    let (code, stdout, _) = run_cli(&["validate", "item", &path, "--json"]);
    assert_eq!(code, Some(0));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(out["record"]["customField"], json!("x"));
    assert_eq!(out["report"]["status"], json!("Drifted"));
}

#[test]
fn test_validate_no_unknown_warnings() {
    let (_temp_dir, path) = write_fixture(&json!({"itemType": "book", "customField": "x"}));

    let (code, stdout, _) = run_cli(&["validate", "item", &path, "--no-unknown-warnings"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Clean"));
}

#[test]
fn test_validate_strict_fails_on_degraded() {
    let (_temp_dir, path) = write_fixture(&json!({
        "itemType": "journalArticle",
        "creators": [{"creatorType": "director", "lastName": "Varda"}]
    }));

    let (code, stdout, _) = run_cli(&["validate", "item", &path]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("InvalidCreatorType"));

    let (code, _, _) = run_cli(&["validate", "item", &path, "--strict"]);
    assert_eq!(code, Some(2));
}

#[test]
fn test_validate_fatal_exits_one() {
    let (_temp_dir, path) = write_fixture(&json!({"itemType": "scroll"}));

    let (code, _, stderr) = run_cli(&["validate", "item", &path]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error: unknown item type 'scroll'"));
}

#[test]
fn test_validate_batch_reports_each_record() {
    let (_temp_dir, path) = write_fixture(&json!([
        {"itemType": "book"},
        {"title": "no type"},
        {"itemType": "film", "creators": [{"name": "Lumière"}]}
    ]));

    let (code, stdout, stderr) = run_cli(&["validate", "item", &path, "--json"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("1 of 3 records could not be validated"));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(out.as_array().unwrap().len(), 3);
    assert_eq!(out[1]["error"], json!("payload has no itemType"));
    assert_eq!(out[2]["record"]["creators"][0]["creatorType"], json!("director"));
}

#[test]
fn test_validate_collection_and_search() {
    let (_temp_dir, path) = write_fixture(&json!({"name": "Reading", "parentCollection": false}));
    let (code, stdout, _) = run_cli(&["validate", "collection", &path]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("collection 'Reading': Clean"));

    let (_temp_dir, path) = write_fixture(&json!({
        "name": "Unread",
        "conditions": [{"condition": "tag", "operator": "isNot", "value": "read"}]
    }));
    let (code, stdout, _) = run_cli(&["validate", "search", &path]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("search 'Unread': Clean"));
}

#[test]
fn test_validate_missing_file() {
    let (code, _, stderr) = run_cli(&["validate", "item", "/nonexistent/records.json"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("failed to read"));
}

#[test]
fn test_template_command() {
    let (code, stdout, _) = run_cli(&["template", "film"]);
    assert_eq!(code, Some(0));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(out["itemType"], json!("film"));
    assert_eq!(out["creators"][0]["creatorType"], json!("director"));
    assert_eq!(out["distributor"], json!(""));
}

#[test]
fn test_template_unknown_type() {
    let (code, _, stderr) = run_cli(&["template", "scroll"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("unknown item type"));
}

#[test]
fn test_date_parse_and_format() {
    let (code, stdout, _) = run_cli(&["date", "parse", "circa 1923"]);
    assert_eq!(code, Some(0));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(out, json!({"dateParts": [[1923]], "circa": true}));

    let (code, stdout, _) = run_cli(&["date", "format", r#"{"dateParts":[[1950],[1955]]}"#]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "1950-1955");
}

#[test]
fn test_fields_command() {
    let (code, stdout, _) = run_cli(&["fields", "thesis"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("university"));
    assert!(stdout.contains("-> publisher"));

    let (code, stdout, _) = run_cli(&["fields", "film", "--json"]);
    assert_eq!(code, Some(0));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(out["primaryCreatorType"], json!("director"));
}

#[test]
fn test_base_field_command() {
    let (code, stdout, _) = run_cli(&["base-field", "publisher", "--json"]);
    assert_eq!(code, Some(0));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert!(out
        .as_array()
        .unwrap()
        .contains(&json!({"itemType": "thesis", "field": "university"})));

    let (code, _, stderr) = run_cli(&["base-field", "edition"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("unknown base field"));
}

#[test]
fn test_types_command() {
    let (code, stdout, _) = run_cli(&["types", "--json"]);
    assert_eq!(code, Some(0));
    let out: Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(out.as_array().unwrap().len(), 40);
}
