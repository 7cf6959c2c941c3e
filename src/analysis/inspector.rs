// src/analysis/inspector.rs
//! Threshold checks that turn cohesion results into findings.

use super::cohesion::CohesionResult;
use crate::rules::RuleId;
use crate::syntax::TypeDeclaration;
use crate::types::{DiagnosticSink, Finding, MessageArgs};

/// More state members than this triggers `NH002`.
pub const STATE_THRESHOLD: usize = 5;
/// More behavior members than this triggers `NH003`.
pub const BEHAVIOR_THRESHOLD: usize = 20;
/// LCOM1 at or above this triggers `NH004`.
pub const LCOM1_THRESHOLD: f64 = 0.8;

/// Emits zero to three findings for `decl`. The checks are independent and
/// all point at the type declaration.
pub fn inspect(decl: &TypeDeclaration, result: &CohesionResult, sink: &mut dyn DiagnosticSink) {
    check_state(decl, result, sink);
    check_behavior(decl, result, sink);
    check_cohesion(decl, result, sink);
}

fn check_state(decl: &TypeDeclaration, result: &CohesionResult, sink: &mut dyn DiagnosticSink) {
    if result.state_count > STATE_THRESHOLD {
        sink.report(count_finding(RuleId::TooManyFields, decl, result.state_count));
    }
}

fn check_behavior(decl: &TypeDeclaration, result: &CohesionResult, sink: &mut dyn DiagnosticSink) {
    if result.behavior_count > BEHAVIOR_THRESHOLD {
        sink.report(count_finding(RuleId::TooManyMethods, decl, result.behavior_count));
    }
}

fn check_cohesion(decl: &TypeDeclaration, result: &CohesionResult, sink: &mut dyn DiagnosticSink) {
    // Degenerate types have lcom1 = -inf and never reach the threshold.
    if result.lcom1 >= LCOM1_THRESHOLD {
        sink.report(Finding::new(
            RuleId::LowCohesion,
            decl.location,
            MessageArgs::Ratio {
                type_name: decl.name.clone(),
                ratio: result.display_lcom1(),
            },
        ));
    }
}

fn count_finding(rule: RuleId, decl: &TypeDeclaration, count: usize) -> Finding {
    Finding::new(
        rule,
        decl.location,
        MessageArgs::Count {
            type_name: decl.name.clone(),
            count,
        },
    )
}
