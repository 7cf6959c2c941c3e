use crate::types::{MessageArgs, ScanReport, TypeMetrics};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct FindingRecord<'a> {
    path: &'a Path,
    rule: &'static str,
    line: usize,
    column: usize,
    message: String,
    args: &'a MessageArgs,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    findings: Vec<FindingRecord<'a>>,
    files_scanned: usize,
    total_types: usize,
    total_findings: usize,
    failures: &'a [crate::types::FileFailure],
    duration_ms: u128,
}

#[derive(Serialize)]
struct MetricsRecord<'a> {
    path: &'a Path,
    #[serde(flatten)]
    metrics: &'a TypeMetrics,
}

/// Serializes a check run as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn check_to_json(report: &ScanReport) -> serde_json::Result<String> {
    let findings = report
        .files
        .iter()
        .flat_map(|file| {
            file.findings.iter().map(|finding| FindingRecord {
                path: &file.path,
                rule: finding.rule.code(),
                line: finding.location.line,
                column: finding.location.column,
                message: finding.message(),
                args: &finding.args,
            })
        })
        .collect();

    serde_json::to_string_pretty(&CheckOutput {
        findings,
        files_scanned: report.files.len(),
        total_types: report.total_types,
        total_findings: report.total_findings,
        failures: &report.failures,
        duration_ms: report.duration_ms,
    })
}

/// Serializes per-type metrics as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn metrics_to_json(report: &ScanReport) -> serde_json::Result<String> {
    let records: Vec<MetricsRecord<'_>> = report
        .files
        .iter()
        .flat_map(|file| {
            file.types.iter().map(|metrics| MetricsRecord {
                path: &file.path,
                metrics,
            })
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleId;
    use crate::syntax::Location;
    use crate::types::{FileReport, Finding};
    use std::path::PathBuf;

    fn sample() -> ScanReport {
        let mut file = FileReport::new(PathBuf::from("src/Kettle.cs"));
        file.findings.push(Finding::new(
            RuleId::LowCohesion,
            Location::new(3, 5),
            MessageArgs::Ratio {
                type_name: "Kettle".into(),
                ratio: 0.82,
            },
        ));
        file.types.push(TypeMetrics {
            name: "Kettle".into(),
            location: Location::new(3, 5),
            state_count: 6,
            behavior_count: 14,
            lcom1: 1.0 - 15.0 / 84.0,
        });
        ScanReport {
            files: vec![file],
            total_types: 1,
            total_findings: 1,
            ..ScanReport::default()
        }
    }

    #[test]
    fn test_check_json_shape() {
        let json = check_to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let finding = &value["findings"][0];
        assert_eq!(finding["rule"], "NH004");
        assert_eq!(finding["line"], 3);
        assert_eq!(finding["message"], "Type 'Kettle' has low cohesion (LCOM1: 0.82)");
        assert_eq!(value["total_findings"], 1);
    }

    #[test]
    fn test_metrics_json_shape() {
        let json = metrics_to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["path"], "src/Kettle.cs");
        assert_eq!(value[0]["state_count"], 6);
        assert_eq!(value[0]["behavior_count"], 14);
    }
}
