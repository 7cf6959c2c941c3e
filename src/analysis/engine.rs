//! Main execution logic for the analysis engine.

use std::path::PathBuf;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::config::Config;
use crate::types::{FileFailure, FileReport, ScanReport};

use super::worker;

/// Runs the per-file pipeline over many files in parallel.
pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scans `files`. A file that cannot be read or parsed becomes a
    /// [`FileFailure`]; the remaining files are still analyzed.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        let start = std::time::Instant::now();

        let outcomes: Vec<Result<FileReport, FileFailure>> = files
            .par_iter()
            .map(|path| {
                worker::scan_file(path, &self.config).map_err(|e| {
                    tracing::warn!(path = %path.display(), error = %e, "file skipped");
                    FileFailure {
                        path: path.clone(),
                        reason: e.to_string(),
                    }
                })
            })
            .collect();

        let mut results = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(report) => results.push(report),
                Err(failure) => failures.push(failure),
            }
        }

        let report = ScanReport {
            total_types: results.iter().map(|r| r.types.len()).sum(),
            total_findings: results.iter().map(|r| r.findings.len()).sum(),
            files: results,
            failures,
            duration_ms: start.elapsed().as_millis(),
        };
        tracing::info!(
            files = report.files.len(),
            types = report.total_types,
            findings = report.total_findings,
            failures = report.failures.len(),
            duration_ms = %report.duration_ms,
            "scan complete"
        );
        report
    }
}
