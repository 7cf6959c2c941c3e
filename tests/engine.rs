// tests/engine.rs
//! Discovery and parallel scanning over real directories.

use lcom_core::analysis::Engine;
use lcom_core::config::Config;
use lcom_core::discovery;
use lcom_core::rules::RuleId;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SIX_FIELDS: &str = "class Wide { int a; int b; int c; int d; int e; int f; }";
const SMALL: &str = "class Small { int a; int Get() => a; }";

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/Wide.cs", SIX_FIELDS);
    write(dir.path(), "src/Small.cs", SMALL);
    write(dir.path(), "src/Form1.Designer.cs", SIX_FIELDS);
    write(dir.path(), "obj/Debug/Temp.cs", SIX_FIELDS);
    write(dir.path(), "bin/Release/Other.cs", SIX_FIELDS);
    write(dir.path(), "README.md", "# docs");
    dir
}

#[test]
fn test_discovery_prunes_build_output() {
    let dir = project();
    let files = discovery::discover(&[dir.path().to_path_buf()], &Config::new());
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(names, vec!["Form1.Designer.cs", "Small.cs", "Wide.cs"]);
}

#[test]
fn test_scan_reports_per_file() {
    let dir = project();
    let files = discovery::discover(&[dir.path().to_path_buf()], &Config::new());
    let report = Engine::new(Config::new()).scan(&files);

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.total_findings, 1);
    assert_eq!(report.rule_count(RuleId::TooManyFields), 1);
    assert_eq!(report.total_types, 2);
    assert_eq!(report.clean_file_count(), 2);
    assert!(report.failures.is_empty());

    let generated: Vec<&Path> = report
        .files
        .iter()
        .filter(|f| f.generated)
        .map(|f| f.path.as_path())
        .collect();
    assert_eq!(generated.len(), 1);
    assert!(generated[0].ends_with("Form1.Designer.cs"));
}

#[test]
fn test_unreadable_file_does_not_stop_scan() {
    let dir = project();
    let missing = dir.path().join("src/Missing.cs");
    let files = vec![dir.path().join("src/Wide.cs"), missing.clone()];
    let report = Engine::new(Config::new()).scan(&files);

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.total_findings, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, missing);
}

#[test]
fn test_disabled_rule_and_ignore_file() {
    let dir = project();
    write(dir.path(), "lcom.toml", "[rules]\ndisabled = [\"NH002\"]\n");
    write(dir.path(), ".lcomignore", "# skip small types\nSmall\\.cs$\n");

    let config = Config::load(dir.path()).unwrap();
    let files = discovery::discover(&[dir.path().to_path_buf()], &config);
    assert!(files.iter().all(|p| !p.ends_with("Small.cs")));

    let report = Engine::new(config).scan(&files);
    assert!(!report.has_findings());
    assert_eq!(report.total_types, 1);
}

#[test]
fn test_single_file_root() {
    let dir = project();
    let file = dir.path().join("src/Wide.cs");
    let files = discovery::discover(&[file.clone()], &Config::new());
    assert_eq!(files, vec![file]);
}
