// src/cli/handlers.rs
//! Core analysis command handlers.

use super::args::ScanArgs;
use crate::analysis::Engine;
use crate::config::Config;
use crate::discovery;
use crate::exit::LcomExit;
use crate::reporting;
use crate::types::ScanReport;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[must_use]
pub fn get_repo_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Handles `lcom check`.
///
/// # Errors
/// Returns error if configuration loading or output serialization fails.
pub fn handle_check(args: &ScanArgs) -> Result<LcomExit> {
    let Some(report) = run_scan(args)? else {
        return Ok(LcomExit::InvalidInput);
    };

    if args.json {
        println!("{}", reporting::check_to_json(&report)?);
    } else {
        reporting::print_report(&report);
    }

    Ok(if report.has_findings() {
        LcomExit::FindingsReported
    } else if report.failures.is_empty() {
        LcomExit::Success
    } else {
        LcomExit::Error
    })
}

/// Handles `lcom metrics`.
///
/// # Errors
/// Returns error if configuration loading or output serialization fails.
pub fn handle_metrics(args: &ScanArgs) -> Result<LcomExit> {
    let Some(report) = run_scan(args)? else {
        return Ok(LcomExit::InvalidInput);
    };

    if args.json {
        println!("{}", reporting::metrics_to_json(&report)?);
    } else {
        reporting::print_metrics(&report);
    }

    Ok(if report.failures.is_empty() {
        LcomExit::Success
    } else {
        LcomExit::Error
    })
}

#[must_use]
pub fn handle_rules() -> LcomExit {
    reporting::print_rules();
    LcomExit::Success
}

/// Loads config from the working directory, discovers files and scans them.
/// Returns `None` when a requested path does not exist.
fn run_scan(args: &ScanArgs) -> Result<Option<ScanReport>> {
    let root = get_repo_root();
    let config = Config::load(&root)
        .with_context(|| format!("Failed to load configuration from {}", root.display()))?;

    let roots = resolve_roots(&args.paths);
    if let Some(missing) = roots.iter().find(|p| !p.exists()) {
        eprintln!("Error: path not found: {}", missing.display());
        return Ok(None);
    }

    let files = discovery::discover(&roots, &config);
    Ok(Some(Engine::new(config).scan(&files)))
}

fn resolve_roots(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    }
}
