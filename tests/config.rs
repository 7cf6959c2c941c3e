// tests/config.rs
use lcom_core::config::Config;
use lcom_core::error::LcomError;
use lcom_core::rules::RuleId;
use std::fs;
use tempfile::TempDir;

fn root_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn test_missing_files_give_defaults() {
    let dir = root_with(&[]);
    let config = Config::load(dir.path()).unwrap();
    assert!(config.skip_generated);
    assert!(config.include_patterns.is_empty());
    assert!(config.exclude_patterns.is_empty());
}

#[test]
fn test_full_toml() {
    let dir = root_with(&[(
        "lcom.toml",
        r#"
[rules]
disabled = ["NH004"]

[scan]
include = ["src/.*"]
exclude = ["Migrations/.*", "tests/.*"]
skip_generated = false
"#,
    )]);
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.disabled_rules, vec![RuleId::LowCohesion]);
    assert_eq!(config.include_patterns.len(), 1);
    assert_eq!(config.exclude_patterns.len(), 2);
    assert!(!config.skip_generated);
}

#[test]
fn test_ignore_file_appends_excludes() {
    let dir = root_with(&[
        ("lcom.toml", "[scan]\nexclude = [\"Legacy/\"]\n"),
        (".lcomignore", "# generated clients\nClients/\n\nProxies/\n"),
    ]);
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.exclude_patterns.len(), 3);
}

#[test]
fn test_malformed_toml_names_the_file() {
    let dir = root_with(&[("lcom.toml", "[scan\ninclude = 1")]);
    let err = Config::load(dir.path()).unwrap_err();
    assert!(matches!(err, LcomError::Config { .. }));
    assert!(err.to_string().contains("lcom.toml"));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let dir = root_with(&[(".lcomignore", "([unclosed\n")]);
    assert!(matches!(Config::load(dir.path()), Err(LcomError::Regex(_))));
}
