use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy a fixture into a scratch directory so the in-place rewrite cannot touch the original
fn scratch_copy(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let target = dir.path().join(name);
    fs::copy(fixture_path(name), &target).unwrap();
    target
}

#[test]
fn fixes_notebook_in_place() {
    let dir = tempdir().unwrap();
    let notebook = scratch_copy(&dir, "widgets.ipynb");

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook);
    cmd.assert()
        .success()
        .stdout(format!("Fixed widgets in {}\n", notebook.display()));

    let written = fs::read_to_string(&notebook).unwrap();
    assert!(written.contains("Größe"));
    assert!(written.contains("Résultats ✓"));
    assert!(written.starts_with("{\n  \"cells\": [\n    {\n      \"cell_type\": \"code\""));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["cells"][0]["metadata"], json!({"widgets": {"state": {}}}));
    assert_eq!(value["cells"][1]["metadata"], json!({}));
    assert_eq!(value["metadata"]["widgets"]["state"], json!({}));
    assert_eq!(
        value["metadata"]["widgets"]["application/vnd.jupyter.widget-state+json"]["version_major"],
        json!(2)
    );
}

#[test]
fn no_arguments_exits_with_usage() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.current_dir(dir.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: fix-notebook-widgets"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_path_exits_with_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.ipynb");

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&missing);
    cmd.assert()
        .code(2)
        .stdout(format!("File not found: {}\n", missing.display()));

    assert!(!missing.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn malformed_notebook_is_left_alone() {
    let dir = tempdir().unwrap();
    let notebook = dir.path().join("broken.ipynb");
    fs::write(&notebook, "{\"cells\": [}").unwrap();

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook);
    cmd.assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to parse"));

    assert_eq!(fs::read_to_string(&notebook).unwrap(), "{\"cells\": [}");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let dir = tempdir().unwrap();
    let notebook = scratch_copy(&dir, "widgets.ipynb");

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook).env("NBFIX_LOG", "debug");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Fixed widgets in"))
        .stderr(predicate::str::contains("fixed notebook widgets"));
}

#[test]
fn running_twice_is_stable() {
    let dir = tempdir().unwrap();
    let notebook = scratch_copy(&dir, "widgets.ipynb");

    cargo_bin_cmd!("fix-notebook-widgets")
        .arg(&notebook)
        .assert()
        .success();
    let first = fs::read_to_string(&notebook).unwrap();

    cargo_bin_cmd!("fix-notebook-widgets")
        .arg(&notebook)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&notebook).unwrap(), first);
}

#[test]
fn non_utf8_notebook_exits_with_parse_code() {
    let dir = tempdir().unwrap();
    let notebook = dir.path().join("latin1.ipynb");
    fs::write(&notebook, b"{\"source\": \"caf\xe9\"}").unwrap();

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("failed to parse"));

    assert_eq!(fs::read(&notebook).unwrap(), b"{\"source\": \"caf\xe9\"}");
}

#[test]
fn env_config_file_sets_layout() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("user.toml");
    fs::write(&config, "[output]\nindent_width = 4\ntrailing_newline = true\n").unwrap();
    let notebook = dir.path().join("nb.ipynb");
    fs::write(&notebook, r#"{"metadata": {"widgets": {}}}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook).env("NBFIX_CONFIG", &config);
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&notebook).unwrap(),
        "{\n    \"metadata\": {\n        \"widgets\": {\n            \"state\": {}\n        }\n    }\n}\n"
    );
}

#[test]
fn flags_override_env_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("user.toml");
    fs::write(&config, "[output]\nindent_width = 4\ntrailing_newline = true\n").unwrap();
    let notebook = dir.path().join("nb.ipynb");
    fs::write(&notebook, r#"{"a": [1]}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook)
        .args(["--indent", "1"])
        .env("NBFIX_CONFIG", &config);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&notebook).unwrap(), "{\n \"a\": [\n  1\n ]\n}\n");
}

#[test]
fn absent_env_config_file_is_ignored() {
    let dir = tempdir().unwrap();
    let notebook = dir.path().join("nb.ipynb");
    fs::write(&notebook, r#"{"a": 1}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook)
        .env("NBFIX_CONFIG", dir.path().join("nowhere.toml"));
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&notebook).unwrap(), "{\n  \"a\": 1\n}");
}

#[test]
fn broken_env_config_file_exits_with_config_code() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("user.toml");
    fs::write(&config, "[output\n").unwrap();
    let notebook = dir.path().join("nb.ipynb");
    fs::write(&notebook, "{}").unwrap();

    let mut cmd = cargo_bin_cmd!("fix-notebook-widgets");
    cmd.arg(&notebook).env("NBFIX_CONFIG", &config);
    cmd.assert()
        .code(5)
        .stderr(predicate::str::contains("Configuration error"));

    assert_eq!(fs::read_to_string(&notebook).unwrap(), "{}");
}
