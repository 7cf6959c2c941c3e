use crate::types::{Finding, ScanReport};
use std::path::Path;
use std::time::Duration;

pub(crate) fn collect_findings(report: &ScanReport) -> Vec<(&Path, &Finding)> {
    let mut all: Vec<(&Path, &Finding)> = Vec::new();
    for file in &report.files {
        for f in &file.findings {
            all.push((&file.path, f));
        }
    }
    all
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn duration(report: &ScanReport) -> Duration {
    let ms = u64::try_from(report.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}

/// Renders an LCOM1 value for tables; degenerate types show `-`.
pub(crate) fn format_lcom1(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", crate::analysis::cohesion::truncate_two_decimals(value))
    } else {
        "-".to_string()
    }
}
