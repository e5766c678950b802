//! The persisted optimization result — an immutable audit record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConfidenceInterval, Pattern};

/// One scheduled step of the execution timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledStep {
    pub entity_id: String,
    pub action_id: String,
    /// Offset from the start of the run, in hours.
    pub start_hour: f64,
    pub end_hour: f64,
    /// Mean simulated success rate for this pair.
    pub success_rate: f64,
    /// Mean simulated risk level for this pair, 0–100.
    pub risk: f64,
}

impl ScheduledStep {
    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// Aggregate risk across the scheduled timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Mean risk level, 0–100.
    pub total: f64,
    /// Mean detection probability, 0–1.
    pub detection: f64,
    /// Mean collateral damage, 0–100.
    pub collateral: f64,
}

/// The final record of one optimization run.
///
/// Created once per run, persisted, thereafter immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Unique run identifier (UUID v4).
    pub run_id: String,
    /// Action id of the highest-scoring chosen pair, if any.
    pub representative_action: Option<String>,
    /// Entity ids in descending priority order.
    pub ranked_entities: Vec<String>,
    /// The ordered execution timeline.
    pub timeline: Vec<ScheduledStep>,
    /// Entity ids dropped because they did not fit the time budget.
    pub deferred: Vec<String>,
    /// Mean of the scheduled steps' success rates; 0.0 for an empty timeline.
    pub expected_success_rate: f64,
    pub risk_breakdown: RiskBreakdown,
    /// Resource name → summed mean consumption across scheduled steps.
    pub resource_totals: BTreeMap<String, f64>,
    /// Mean of per-step interval bounds. An approximation, not a rigorous
    /// joint interval.
    pub combined_interval: ConfidenceInterval,
    /// The pattern set the run was evaluated against.
    pub patterns: Vec<Pattern>,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl OptimizationResult {
    /// Cumulative scheduled duration in hours.
    pub fn scheduled_hours(&self) -> f64 {
        self.timeline.iter().map(ScheduledStep::duration_hours).sum()
    }
}
