//! Aggregation of trial series into metric and resource statistics.

use std::collections::BTreeMap;

use stratagem_core::config::CI_Z_95;
use stratagem_core::stats::{mean, std_dev};
use stratagem_core::types::{Action, ConfidenceInterval, MetricStats, ResourceStats};

use crate::trial::TrialOutcome;

/// Mean, sample std-dev, and 95% CI for one series of N trials.
pub fn metric_stats(series: &[f64]) -> MetricStats {
    let m = mean(series);
    let s = std_dev(series);
    let half_width = if series.is_empty() {
        0.0
    } else {
        CI_Z_95 * s / (series.len() as f64).sqrt()
    };
    MetricStats {
        mean: m,
        std_dev: s,
        interval: ConfidenceInterval {
            lower: m - half_width,
            upper: m + half_width,
        },
    }
}

/// Per-resource consumption statistics across all trials.
///
/// Resource columns in `TrialOutcome` are aligned with the action's
/// resource map iteration order.
pub fn resource_stats(action: &Action, outcomes: &[TrialOutcome]) -> BTreeMap<String, ResourceStats> {
    let mut stats = BTreeMap::new();
    for (idx, name) in action.resources.keys().enumerate() {
        let series: Vec<f64> = outcomes.iter().map(|o| o.resources[idx]).collect();
        let (min, max) = series.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
        stats.insert(
            name.clone(),
            ResourceStats {
                mean: mean(&series),
                std_dev: std_dev(&series),
                min: if series.is_empty() { 0.0 } else { min },
                max: if series.is_empty() { 0.0 } else { max },
            },
        );
    }
    stats
}
