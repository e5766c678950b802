//! Environmental pattern detection — the weather with the best success rate.

use std::collections::BTreeMap;

use tracing::debug;

use stratagem_core::config::{MIN_ENVIRONMENTAL_RECORDS, MIN_WEATHER_SAMPLES};
use stratagem_core::stats::mean;
use stratagem_core::types::{Pattern, PatternKind};

use crate::history::HistoryStore;

/// Detect the weather label with the highest historical success rate.
///
/// Requires at least `MIN_ENVIRONMENTAL_RECORDS` total records; labels with
/// fewer than `MIN_WEATHER_SAMPLES` samples are ignored. The winning
/// label's mean success becomes the pattern's confidence.
pub fn detect_environmental(history: &HistoryStore) -> Option<Pattern> {
    let records = history.all();
    if records.len() < MIN_ENVIRONMENTAL_RECORDS {
        return None;
    }

    let mut by_weather: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_weather
            .entry(record.weather.as_str())
            .or_default()
            .push(record.success_rate);
    }

    let best = by_weather
        .iter()
        .filter(|(_, rates)| rates.len() >= MIN_WEATHER_SAMPLES)
        .map(|(label, rates)| (*label, mean(rates), rates.len()))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

    let (label, avg_success, samples) = best;
    debug!(weather = label, avg_success, "environmental pattern detected");

    Some(Pattern {
        id: format!("environmental-{label}"),
        kind: PatternKind::Environmental {
            best_weather: label.to_string(),
            avg_success,
        },
        confidence: avg_success,
        frequency: samples as f64 / records.len() as f64,
    })
}
