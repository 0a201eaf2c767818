//! Friction scoring: weighted sum of rework signals, one-decimal rounding.

use crate::config::ScoringWeights;
use crate::core::SignalSet;

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Combines a [`SignalSet`] into a single bounded score. Pure; the weights
/// are fixed at construction.
pub struct FrictionScorer {
    weights: ScoringWeights,
}

impl FrictionScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, signals: &SignalSet) -> f64 {
        let raw = f64::from(signals.reopens) * self.weights.reopens
            + f64::from(signals.loops) * self.weights.loops
            + f64::from(signals.backtracks) * self.weights.backtracks
            + f64::from(signals.assignee_changes) * self.weights.assignee_changes
            + signals.idle_days * self.weights.idle_days;
        round_to_tenth(raw)
    }
}

impl Default for FrictionScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
