// src/reporting/mod.rs
//! Console and JSON renderings of scan results.

pub mod console;
pub mod json;
mod shared;

pub use console::{print_metrics, print_report, print_rules};
pub use json::{check_to_json, metrics_to_json};
