use crate::reporting::shared::{collect_findings, duration, format_lcom1, pluralize};
use crate::rules::{RuleDescriptor, RuleId};
use crate::types::{FileFailure, Finding, ScanReport};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Prints findings grouped per file, then failures and a summary line.
pub fn print_report(report: &ScanReport) {
    for (path, finding) in collect_findings(report) {
        print_finding(path, finding);
    }
    print_failures(&report.failures);
    print_summary(report);
}

fn print_finding(path: &Path, finding: &Finding) {
    let descriptor = finding.rule.descriptor();
    let header = format!(
        "{}[{}]: {}",
        descriptor.severity.prefix(),
        finding.rule,
        finding.message()
    );
    println!("{}", header.yellow().bold());
    println!("  {} {}:{}", "-->".blue(), path.display(), finding.location);
    print_snippet(path, finding.location.line);
    println!("   {} {}: {}", "=".blue(), finding.rule.code().yellow(), descriptor.title);
    println!();
}

fn print_snippet(path: &Path, line: usize) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    let Some(text) = content.lines().nth(line.saturating_sub(1)) else {
        return;
    };
    let gutter = format!("{line:3} |");
    println!("   {}", "|".blue());
    println!("   {} {}", gutter.blue(), text);
    println!("   {}", "|".blue());
}

fn print_failures(failures: &[FileFailure]) {
    for failure in failures {
        println!(
            "{}: {} ({})",
            "error".red().bold(),
            failure.path.display(),
            failure.reason
        );
    }
}

fn print_summary(report: &ScanReport) {
    let duration = duration(report);
    let files = report.files.len();

    if !report.has_findings() {
        println!(
            "{} No findings in {} {} ({} {}) in {duration:?}.",
            "OK".green().bold(),
            files,
            pluralize("file", files),
            report.total_types,
            pluralize("type", report.total_types)
        );
        return;
    }

    let parts: Vec<String> = RuleId::ALL
        .iter()
        .map(|rule| (rule, report.rule_count(*rule)))
        .filter(|(_, count)| *count > 0)
        .map(|(rule, count)| format!("{rule} x{count}"))
        .collect();

    println!(
        "{} {} {} in {} of {} {} [{}] in {duration:?}.",
        "FAIL".red().bold(),
        report.total_findings,
        pluralize("finding", report.total_findings),
        files - report.clean_file_count(),
        files,
        pluralize("file", files),
        parts.join(", ")
    );
}

/// Prints one row per analyzed type: state count, behavior count, LCOM1.
pub fn print_metrics(report: &ScanReport) {
    let header = format!("{:<40} {:>6} {:>9} {:>6}", "TYPE", "STATE", "BEHAVIOR", "LCOM1");
    println!("{}", header.bold());
    for file in &report.files {
        for metrics in &file.types {
            let name = format!("{} ({}:{})", metrics.name, file.path.display(), metrics.location);
            println!(
                "{:<40} {:>6} {:>9} {:>6}",
                name,
                metrics.state_count,
                metrics.behavior_count,
                format_lcom1(metrics.lcom1)
            );
        }
    }
    print_failures(&report.failures);
}

/// Prints the rule catalogue.
pub fn print_rules() {
    for rule in RuleId::ALL {
        print_descriptor(rule.descriptor());
    }
}

fn print_descriptor(descriptor: &RuleDescriptor) {
    println!(
        "{} {} ({}, {})",
        descriptor.id.code().yellow().bold(),
        descriptor.title.bold(),
        descriptor.category,
        descriptor.severity.prefix()
    );
    println!("   {}", descriptor.message_format.dimmed());
    println!("   {}", descriptor.description);
    println!();
}
