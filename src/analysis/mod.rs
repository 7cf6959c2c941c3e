// src/analysis/mod.rs
//! The per-type pipeline: eligibility, classification, cohesion, thresholds.
//!
//! Every call is independent and touches no shared state, so types from the
//! same or different files can be analyzed concurrently.

pub mod classifier;
pub mod cohesion;
pub mod eligibility;
pub mod engine;
pub mod inspector;
pub mod worker;

pub use engine::Engine;

use crate::syntax::TypeDeclaration;
use crate::types::{DiagnosticSink, TypeMetrics};

/// Analyzes one type declaration and reports its findings into `sink`.
///
/// Returns `None` (and reports nothing) when the declaration is skipped.
pub fn analyze_type(decl: &TypeDeclaration, sink: &mut dyn DiagnosticSink) -> Option<TypeMetrics> {
    if let Some(reason) = eligibility::skip_reason(decl) {
        tracing::trace!(name = %decl.name, ?reason, "type skipped");
        return None;
    }

    let classes = classifier::classify(decl);
    let result = cohesion::cohesion(&classes.state, &classes.behavior);
    inspector::inspect(decl, &result, sink);

    Some(TypeMetrics {
        name: decl.name.clone(),
        location: decl.location,
        state_count: result.state_count,
        behavior_count: result.behavior_count,
        lcom1: result.lcom1,
    })
}
