//! Simulator output — aggregate statistics for one (action, entity) pair.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 95% confidence interval on a simulated aggregate metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Validate the ordering invariant: lower <= upper.
    pub fn is_valid(&self) -> bool {
        self.lower <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Mean, sample standard deviation, and 95% CI of one simulated series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: f64,
    pub std_dev: f64,
    pub interval: ConfidenceInterval,
}

/// Per-resource consumption statistics across trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// The pattern-adjustment factors applied during simulation.
///
/// Weather and intelligence factors are deterministic per run; the timing
/// factor varies per trial, so only the matched pattern id is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFactors {
    pub weather: f64,
    pub intelligence: f64,
    /// Id of the temporal pattern that drove the timing factor, if any.
    pub temporal_pattern: Option<String>,
}

/// Aggregate result of simulating one (action, entity) pair.
///
/// Cached immutably once computed; all probability-valued fields are in
/// [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvaluation {
    pub success: MetricStats,
    pub execution_time: MetricStats,
    pub risk_level: MetricStats,
    pub detection_probability: MetricStats,
    pub collateral_damage: MetricStats,
    pub resources: BTreeMap<String, ResourceStats>,
    pub adjustments: AdjustmentFactors,
    pub trials: u32,
}

impl SimulationEvaluation {
    /// Check the probability-bounds invariant on all probability metrics.
    pub fn probabilities_in_bounds(&self) -> bool {
        let in_unit = |m: &MetricStats| (0.0..=1.0).contains(&m.mean);
        in_unit(&self.success) && in_unit(&self.detection_probability)
    }
}
