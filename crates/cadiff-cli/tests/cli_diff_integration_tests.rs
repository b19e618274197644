//! CLI integration tests
//!
//! These tests run the built `cadiff` binary against designs written to a
//! temporary directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_design(dir: &TempDir, file: &str, name: &str, vstrands: serde_json::Value) -> PathBuf {
    let path = dir.path().join(file);
    let doc = serde_json::json!({ "name": name, "vstrands": vstrands });
    fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();
    path
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cadiff"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_cli_reports_moves() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "old.json", "d", serde_json::json!([{"num": 0}, {"num": 1}]));
    write_design(&dir, "new.json", "d", serde_json::json!([{"num": 1}, {"num": 0}]));

    let output = run(&dir, &["old.json", "new.json"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "0 vstrands added",
            "0 vstrands removed",
            "2 vstrands in common (although could be shuffled around)",
            "2 pair-wise changes in vstrands.",
            "Pairwise changes:",
            "old vstrand 0 moved to 1 (but is otherwise identical)",
            "old vstrand 1 moved to 0 (but is otherwise identical)",
        ]
    );
}

#[test]
fn test_cli_identical_designs() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "a.json", "d", serde_json::json!([{"num": 0}]));
    write_design(&dir, "b.json", "d", serde_json::json!([{"num": 0}]));

    let output = run(&dir, &["a.json", "b.json"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["The two designs share the exact same vstrands."]
    );
}

#[test]
fn test_cli_glob_expands_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "design_1.json", "first", serde_json::json!([]));
    write_design(&dir, "design_2.json", "second", serde_json::json!([]));

    let output = run(&dir, &["design_*.json"]);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0], "New name: first -> second");
}

#[test]
fn test_cli_wrong_source_count_fails() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "only.json", "d", serde_json::json!([]));

    let output = run(&dir, &["only.json", "missing-*.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARNING: File/pattern 'missing-*.json' does not match any files."));
    assert!(stderr.contains("Error: [ERR_SOURCE_COUNT]"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_malformed_design_fails() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "a.json", "d", serde_json::json!([]));
    fs::write(dir.path().join("b.json"), "not json").unwrap();

    let output = run(&dir, &["a.json", "b.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_DOCUMENT"));
}

#[test]
fn test_cli_testing_mode() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["--testing"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "New name: sample_design.json -> sample_design_v2.json");
    assert_eq!(lines.last().map(String::as_str), Some("extended vstrand 3 new vstrand added."));
}

#[test]
fn test_cli_json_output_to_file() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "a.json", "d", serde_json::json!([{"num": 0, "x": 1}]));
    write_design(&dir, "b.json", "d", serde_json::json!([{"num": 0, "x": 2}]));

    let output = run(
        &dir,
        &["a.json", "b.json", "--format", "json", "--output", "diff.json"],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = fs::read_to_string(dir.path().join("diff.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["pairwise_change_count"], 1);
    assert_eq!(parsed["record_changes"][0]["fields"]["diffs"][0]["field"], "x");
}

#[test]
fn test_cli_config_file_supplies_files_and_options() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "a.json", "d", serde_json::json!([{"num": 4, "x": 1}]));
    write_design(&dir, "b.json", "d", serde_json::json!([{"num": 4, "x": 2}]));
    fs::write(
        dir.path().join("cadiff.yaml"),
        "files: [a.json, b.json]\nshow_values: true\nloglevel: 30\n",
    )
    .unwrap();

    let output = run(&dir, &["--config", "cadiff.yaml"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output).last().map(String::as_str),
        Some("  'x' is changed in vstrand 4 (index 0): 1 -> 2")
    );
}

#[test]
fn test_cli_explicit_false_turns_off_configured_show_values() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "a.json", "d", serde_json::json!([{"num": 4, "x": 1}]));
    write_design(&dir, "b.json", "d", serde_json::json!([{"num": 4, "x": 2}]));
    fs::write(
        dir.path().join("cadiff.yaml"),
        "files: [a.json, b.json]\nshow_values: true\n",
    )
    .unwrap();

    let output = run(&dir, &["--config", "cadiff.yaml", "--show-values=false"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output).last().map(String::as_str),
        Some("  'x' is changed in vstrand 4 (index 0)")
    );
}

#[test]
fn test_cli_config_allows_missing_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"vstrands": [{"num": 0}]}"#).unwrap();
    fs::write(dir.path().join("b.json"), r#"{"vstrands": [{"num": 0}]}"#).unwrap();
    fs::write(dir.path().join("cadiff.yaml"), "allow_missing_name: true\n").unwrap();

    let rejected = run(&dir, &["a.json", "b.json"]);
    assert_eq!(rejected.status.code(), Some(1));

    let output = run(&dir, &["--config", "cadiff.yaml", "a.json", "b.json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        vec!["The two designs share the exact same vstrands."]
    );
}

#[test]
fn test_cli_arguments_override_config() {
    let dir = TempDir::new().unwrap();
    write_design(&dir, "a.json", "d", serde_json::json!([{"num": 0}]));
    write_design(&dir, "b.json", "d", serde_json::json!([{"num": 0}]));
    fs::write(dir.path().join("cadiff.yaml"), "format: json\n").unwrap();

    let output = run(
        &dir,
        &["--config", "cadiff.yaml", "--format", "text", "a.json", "b.json"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["The two designs share the exact same vstrands."]
    );
}

#[test]
fn test_cli_invalid_loglevel_fails() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["--testing", "--loglevel", "chatty"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}
