// src/analysis/cohesion.rs
//! LCOM1 calculation over classified members.

use super::classifier::{BehaviorUnit, StateItem};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohesionResult {
    pub state_count: usize,
    pub behavior_count: usize,
    /// `1 - com1`, unclamped: `-inf` when there is no state or no behavior.
    pub lcom1: f64,
}

impl CohesionResult {
    /// LCOM1 truncated (not rounded) to two decimals, for display.
    #[must_use]
    pub fn display_lcom1(&self) -> f64 {
        truncate_two_decimals(self.lcom1)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.state_count == 0 || self.behavior_count == 0
    }
}

/// Computes LCOM1 for one type.
///
/// `com1` is the number of (state, behavior) pairs where the behavior text
/// mentions the state name, divided by `state * behavior`. With no pairs at
/// all `com1` is `+inf`, so `lcom1` becomes `-inf`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cohesion(state: &[StateItem], behavior: &[BehaviorUnit]) -> CohesionResult {
    let sum_of_fields: usize = state
        .iter()
        .map(|item| mentions(&item.name, behavior))
        .sum();
    let data_times_method = state.len() * behavior.len();

    let com1 = if data_times_method == 0 {
        f64::INFINITY
    } else {
        sum_of_fields as f64 / data_times_method as f64
    };

    CohesionResult {
        state_count: state.len(),
        behavior_count: behavior.len(),
        lcom1: 1.0 - com1,
    }
}

/// Number of behavior units whose text contains `name`.
///
/// Plain substring search: `_run` also matches `_running`, and a name inside a
/// string literal or comment counts as a use. Symbol resolution is out of reach
/// for a purely syntactic pass, so these false positives are accepted.
fn mentions(name: &str, behavior: &[BehaviorUnit]) -> usize {
    behavior.iter().filter(|unit| unit.text.contains(name)).count()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn truncate_two_decimals(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    ((value * 100.0) as i64) as f64 / 100.0
}
