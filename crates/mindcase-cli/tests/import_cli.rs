#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{LOGIN_OUTLINE, import_cmd, mindcase_cmd, write_file};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn outline(modules: &str) -> String {
    format!(r#"{{"rootTopic":{{"title":"Shop","children":[{modules}]}}}}"#)
}

#[test]
fn import_prints_accepted_cases_as_text() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "shop.json", LOGIN_OUTLINE);

    import_cmd(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("P1 [functional/manual] /Login Valid login"))
        .stdout(predicate::str::contains("1. Enter credentials -> Success"))
        .stdout(predicate::str::contains("2. Click submit"))
        .stdout(predicate::str::contains("1 accepted, 0 rejected of 1 case nodes"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn import_json_output_is_a_record_array() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "shop.json", LOGIN_OUTLINE);

    let out = import_cmd(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Value = serde_json::from_slice(&out).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["projectId"], "shop");
    assert_eq!(record["maintainer"], "alice");
    assert_eq!(record["priority"], "P1");
    assert_eq!(record["caseType"], "functional");
    assert_eq!(record["method"], "manual");
    assert_eq!(record["nodePath"], "/Login");
    assert_eq!(record["steps"].as_array().unwrap().len(), 2);
    assert_eq!(record["steps"][0]["expectedResult"], "Success");
    assert!(record["id"].is_string());
}

#[test]
fn duplicate_case_exits_with_diagnostics() {
    let dir = TempDir::new().unwrap();
    let case = r#"{"title":"tc:Same","children":[{"title":"Do it"}]}"#;
    let path = write_file(
        &dir,
        "dup.json",
        &outline(&format!(r#"{{"title":"Login","children":[{case},{case}]}}"#)),
    );

    import_cmd(&path)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Test case already exists: Same"));
}

#[test]
fn top_level_case_rejects_whole_outline() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "orphan.json",
        &outline(r#"{"title":"Login","children":[{"title":"tc:Fine"}]},{"title":"tc:Orphan"}"#),
    );

    let out = import_cmd(&path)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Orphan: create module fail"))
        .get_output()
        .stdout
        .clone();

    let records: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(records, Value::Array(Vec::new()));
}

#[test]
fn existing_cases_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "shop.json", LOGIN_OUTLINE);
    let stored = write_file(
        &dir,
        "stored.json",
        r#"[{"name":"Valid login","nodePath":"/Login"}]"#,
    );

    import_cmd(&path)
        .arg("--existing")
        .arg(&stored)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("0 accepted, 1 rejected"))
        .stderr(predicate::str::contains("Test case already exists: Valid login"));
}

#[test]
fn known_name_without_stored_case_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "shop.json", LOGIN_OUTLINE);
    let names = write_file(&dir, "names.txt", "Valid login\n");

    import_cmd(&path)
        .arg("--known-names")
        .arg(&names)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 accepted"));
}

#[test]
fn locale_switches_diagnostic_language() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad.json",
        &outline(r#"{"title":"Login","children":[{"title":"tc no colon"}]}"#),
    );

    import_cmd(&path)
        .args(["--locale", "zh-cn"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("用例名称【 tc no colon 】格式错误"));
}

#[test]
fn config_file_sets_depth_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "deep.json",
        &outline(r#"{"title":"A","children":[{"title":"B","children":[{"title":"tc:Deep"}]}]}"#),
    );
    let config = write_file(&dir, "config.toml", "[validation]\nmax_node_depth = 1\n");

    import_cmd(&path)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The node tree maximum depth is 1 levels"));
}

#[test]
fn unreadable_outline_is_reported_as_incorrect_format() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", "{ not json");

    import_cmd(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The file has an incorrect format"));
}

#[test]
fn missing_outline_file_fails() {
    let dir = TempDir::new().unwrap();

    import_cmd(&dir.path().join("absent.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read outline"));
}

#[test]
fn project_id_is_required() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "shop.json", LOGIN_OUTLINE);

    mindcase_cmd()
        .arg("import")
        .arg(&path)
        .args(["--maintainer", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project-id"));
}
