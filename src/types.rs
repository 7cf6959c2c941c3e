// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::rules::{self, RuleId};
use crate::syntax::Location;

/// Ordered diagnostic arguments. The first is always the type name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageArgs {
    Count { type_name: String, count: usize },
    Ratio { type_name: String, ratio: f64 },
}

impl MessageArgs {
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Count { type_name, .. } | Self::Ratio { type_name, .. } => type_name,
        }
    }

    /// The measured value as shown in messages. Ratios keep two decimals.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Count { count, .. } => count.to_string(),
            Self::Ratio { ratio, .. } => format!("{ratio:.2}"),
        }
    }
}

/// One diagnostic emitted for a type declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub rule: RuleId,
    pub location: Location,
    pub args: MessageArgs,
}

impl Finding {
    #[must_use]
    pub fn new(rule: RuleId, location: Location, args: MessageArgs) -> Self {
        Self {
            rule,
            location,
            args,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        rules::render(
            self.rule.descriptor().message_format,
            self.args.type_name(),
            &self.args.value(),
        )
    }
}

/// Receives findings from the analysis pipeline.
pub trait DiagnosticSink {
    fn report(&mut self, finding: Finding);
}

impl DiagnosticSink for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Measured values for one analyzed type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMetrics {
    pub name: String,
    pub location: Location,
    pub state_count: usize,
    pub behavior_count: usize,
    /// Untruncated; `-inf` for types without state or behavior.
    #[serde(serialize_with = "serialize_ratio")]
    pub lcom1: f64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_ratio<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    pub types: Vec<TypeMetrics>,
    /// Set when the file was skipped as generated code.
    pub generated: bool,
}

impl FileReport {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            findings: Vec::new(),
            types: Vec::new(),
            generated: false,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Aggregated results from scanning multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_types: usize,
    pub total_findings: usize,
    /// Files that could not be read or parsed.
    pub failures: Vec<FileFailure>,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl ScanReport {
    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.total_findings > 0
    }

    #[must_use]
    pub fn clean_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_clean()).count()
    }

    /// Count of findings for a single rule.
    #[must_use]
    pub fn rule_count(&self, rule: RuleId) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.findings)
            .filter(|f| f.rule == rule)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_message() {
        let finding = Finding::new(
            RuleId::TooManyFields,
            Location::new(4, 9),
            MessageArgs::Count {
                type_name: "Test".into(),
                count: 6,
            },
        );
        assert_eq!(finding.message(), "Type 'Test' holds 6 state members");
    }

    #[test]
    fn test_ratio_renders_two_decimals() {
        let args = MessageArgs::Ratio {
            type_name: "Test".into(),
            ratio: 0.9,
        };
        assert_eq!(args.value(), "0.90");
    }

    #[test]
    fn test_degenerate_lcom1_serializes_as_null() {
        let metrics = TypeMetrics {
            name: "Empty".into(),
            location: Location::new(1, 1),
            state_count: 0,
            behavior_count: 0,
            lcom1: f64::NEG_INFINITY,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert!(json["lcom1"].is_null());
    }
}
