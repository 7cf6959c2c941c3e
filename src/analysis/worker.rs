//! Worker module for per-file parsing and analysis.

use std::path::Path;

use crate::config::Config;
use crate::error::{LcomError, Result};
use crate::lang::{csharp, generated};
use crate::types::{FileReport, Finding};

/// Reads, parses and analyzes one C# file.
///
/// # Errors
/// Returns error if the file cannot be read or the parser fails.
pub fn scan_file(path: &Path, config: &Config) -> Result<FileReport> {
    let source = std::fs::read_to_string(path).map_err(|e| LcomError::io(e, path))?;
    scan_source(path, &source, config)
}

/// Analyzes already-loaded source as if it came from `path`.
///
/// # Errors
/// Returns error if the parser fails.
pub fn scan_source(path: &Path, source: &str, config: &Config) -> Result<FileReport> {
    let mut report = FileReport::new(path.to_path_buf());

    if config.skip_generated
        && (generated::is_generated_path(path) || generated::has_generated_header(source))
    {
        tracing::debug!(path = %path.display(), "skipping generated file");
        report.generated = true;
        return Ok(report);
    }

    let declarations = csharp::parse_types(source)?;
    let mut findings: Vec<Finding> = Vec::new();
    for decl in &declarations {
        if decl.generated && !config.skip_generated {
            let mut unmarked = decl.clone();
            unmarked.generated = false;
            report.types.extend(super::analyze_type(&unmarked, &mut findings));
            continue;
        }
        report.types.extend(super::analyze_type(decl, &mut findings));
    }

    findings.retain(|f| config.is_rule_enabled(f.rule));
    report.findings = findings;

    tracing::debug!(
        path = %path.display(),
        types = report.types.len(),
        findings = report.findings.len(),
        "file analyzed"
    );
    Ok(report)
}
