// tests/cli_exit.rs - Exit code and output contract of the `lcom` binary
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const WIDE: &str = "class Wide { int a; int b; int c; int d; int e; int f; }";
const SMALL: &str = "class Small { int a; int Get() => a; }";

fn temp(files: &[(&str, &str)]) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(d.path().join("src")).unwrap();
    for (name, content) in files {
        fs::write(d.path().join(name), content).unwrap();
    }
    d
}

fn lcom(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lcom"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_exit_0_clean() {
    let d = temp(&[("src/Small.cs", SMALL)]);
    let out = lcom(d.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_exit_6_findings() {
    let d = temp(&[("src/Wide.cs", WIDE), ("src/Small.cs", SMALL)]);
    let out = lcom(d.path(), &["check", "src"]);
    assert_eq!(out.status.code(), Some(6));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("warning[NH002]: Type 'Wide' holds 6 state members"));
}

#[test]
fn test_exit_1_bad_config() {
    let d = temp(&[("src/Wide.cs", WIDE), ("lcom.toml", "[rules\ndisabled = 3")]);
    let out = lcom(d.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_exit_2_missing_path() {
    let d = temp(&[]);
    let out = lcom(d.path(), &["check", "does/not/exist"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_disabled_rule_turns_exit_clean() {
    let d = temp(&[
        ("src/Wide.cs", WIDE),
        ("lcom.toml", "[rules]\ndisabled = [\"NH002\"]\n"),
    ]);
    let out = lcom(d.path(), &["check"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_check_json() {
    let d = temp(&[("src/Wide.cs", WIDE), ("src/Small.cs", SMALL)]);
    let out = lcom(d.path(), &["check", "--json"]);
    assert_eq!(out.status.code(), Some(6));
    let value = json(&out);
    assert_eq!(value["files_scanned"], 2);
    assert_eq!(value["total_types"], 2);
    assert_eq!(value["total_findings"], 1);
    assert_eq!(value["findings"][0]["rule"], "NH002");
    assert_eq!(value["findings"][0]["line"], 1);
    assert_eq!(value["findings"][0]["column"], 1);
}

#[test]
fn test_metrics_json() {
    let d = temp(&[("src/Wide.cs", WIDE), ("src/Small.cs", SMALL)]);
    let out = lcom(d.path(), &["metrics", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let value = json(&out);
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let small = rows.iter().find(|r| r["name"] == "Small").unwrap();
    assert_eq!(small["state_count"], 1);
    assert_eq!(small["behavior_count"], 1);
    assert_eq!(small["lcom1"], 0.0);

    let wide = rows.iter().find(|r| r["name"] == "Wide").unwrap();
    assert_eq!(wide["state_count"], 6);
    assert!(wide["lcom1"].is_null());
}

#[test]
fn test_rules_lists_every_rule() {
    let d = temp(&[]);
    let out = lcom(d.path(), &["rules"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    for code in ["NH002", "NH003", "NH004"] {
        assert!(stdout.contains(code), "missing {code}");
    }
}
