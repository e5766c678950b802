//! Result aggregation — rolls the timeline up into the audit record.

use std::collections::BTreeMap;

use chrono::Utc;

use stratagem_core::stats::mean;
use stratagem_core::types::{
    ConfidenceInterval, OptimizationResult, Pattern, RiskBreakdown,
};

use crate::optimizer::{Assignment, Combination};
use crate::sequencer::SequencedTimeline;

/// Assemble the final result record from one run's artifacts.
///
/// Risk and interval roll-ups average over the *scheduled* steps only;
/// deferred pairs contribute nothing. The combined interval is the mean of
/// the per-step success-interval bounds — an approximation, not a rigorous
/// joint interval for correlated metrics.
pub fn aggregate(
    run_id: String,
    ranked_entities: Vec<String>,
    combination: &Combination,
    timeline: SequencedTimeline,
    patterns: Vec<Pattern>,
    duration_ms: u64,
) -> OptimizationResult {
    let scheduled: Vec<&Assignment> = timeline
        .steps
        .iter()
        .filter_map(|step| {
            combination
                .assignments
                .iter()
                .find(|a| a.entity.id == step.entity_id)
        })
        .collect();

    let success_rates: Vec<f64> = timeline.steps.iter().map(|s| s.success_rate).collect();
    let risks: Vec<f64> = timeline.steps.iter().map(|s| s.risk).collect();
    let detections: Vec<f64> = scheduled
        .iter()
        .map(|a| a.evaluation.detection_probability.mean)
        .collect();
    let collaterals: Vec<f64> = scheduled
        .iter()
        .map(|a| a.evaluation.collateral_damage.mean)
        .collect();

    let mut resource_totals: BTreeMap<String, f64> = BTreeMap::new();
    for assignment in &scheduled {
        for (name, stats) in &assignment.evaluation.resources {
            *resource_totals.entry(name.clone()).or_insert(0.0) += stats.mean;
        }
    }

    let lowers: Vec<f64> = scheduled
        .iter()
        .map(|a| a.evaluation.success.interval.lower)
        .collect();
    let uppers: Vec<f64> = scheduled
        .iter()
        .map(|a| a.evaluation.success.interval.upper)
        .collect();

    // Representative action: the highest-scoring scheduled pair.
    let representative_action = scheduled
        .iter()
        .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
        .map(|a| a.action.id.clone());

    OptimizationResult {
        run_id,
        representative_action,
        ranked_entities,
        expected_success_rate: mean(&success_rates),
        risk_breakdown: RiskBreakdown {
            total: mean(&risks),
            detection: mean(&detections),
            collateral: mean(&collaterals),
        },
        resource_totals,
        combined_interval: ConfidenceInterval {
            lower: mean(&lowers),
            upper: mean(&uppers),
        },
        timeline: timeline.steps,
        deferred: timeline.deferred,
        patterns,
        duration_ms,
        created_at: Utc::now(),
    }
}
