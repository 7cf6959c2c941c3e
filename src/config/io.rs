// src/config/io.rs
use super::types::{Config, LcomToml};
use crate::error::{LcomError, Result};
use crate::rules::RuleId;
use regex::Regex;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "lcom.toml";
pub const IGNORE_FILE: &str = ".lcomignore";

/// Reads `lcom.toml` under `root`, if present.
///
/// # Errors
/// Returns error if the file exists but cannot be read or is not valid TOML.
pub fn load_toml_config(root: &Path) -> Result<Option<LcomToml>> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(|e| LcomError::io(e, &path))?;
    let parsed = toml::from_str(&content).map_err(|source| LcomError::Config { source, path })?;
    Ok(Some(parsed))
}

/// Applies a parsed `lcom.toml` on top of `config`.
///
/// # Errors
/// Returns error on an invalid pattern or an unknown rule id.
pub fn apply_toml(config: &mut Config, toml: &LcomToml) -> Result<()> {
    config.include_patterns.extend(compile_all(&toml.scan.include)?);
    config.exclude_patterns.extend(compile_all(&toml.scan.exclude)?);
    config.skip_generated = toml.scan.skip_generated;

    for code in &toml.rules.disabled {
        let rule = RuleId::from_code(code).ok_or_else(|| LcomError::UnknownRule(code.clone()))?;
        if !config.disabled_rules.contains(&rule) {
            config.disabled_rules.push(rule);
        }
    }
    Ok(())
}

/// Reads `.lcomignore` under `root` and appends its patterns to the excludes.
///
/// # Errors
/// Returns error if the file cannot be read or holds an invalid pattern.
pub fn load_ignore_file(config: &mut Config, root: &Path) -> Result<()> {
    let path = root.join(IGNORE_FILE);
    if !path.is_file() {
        return Ok(());
    }
    let content = fs::read_to_string(&path).map_err(|e| LcomError::io(e, &path))?;
    for line in content.lines() {
        process_ignore_line(config, line)?;
    }
    Ok(())
}

/// Adds one `.lcomignore` line. Blank lines and `#` comments are skipped.
///
/// # Errors
/// Returns error if the line is not a valid regex.
pub fn process_ignore_line(config: &mut Config, line: &str) -> Result<()> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }
    config.exclude_patterns.push(Regex::new(trimmed)?);
    Ok(())
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(LcomError::from))
        .collect()
}
