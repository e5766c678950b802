//! Temporal pattern detection — hour-of-day activity peaks per category.

use tracing::debug;

use stratagem_core::config::{
    HOURS_PER_DAY, MIN_TEMPORAL_RECORDS, PEAK_TIMING_ADJUSTMENT, TEMPORAL_BASE_CONFIDENCE,
};
use stratagem_core::types::{EntityCategory, Pattern, PatternKind};

use crate::history::HistoryStore;

/// Detect the hour-of-day activity pattern for one entity category.
///
/// Requires at least `MIN_TEMPORAL_RECORDS` records of that category.
/// Hours whose record count exceeds the mean bucket count are peak hours.
/// Returns `None` below the record-count floor.
pub fn detect_temporal(history: &HistoryStore, category: EntityCategory) -> Option<Pattern> {
    let records = history.by_entity_category(category);
    if records.len() < MIN_TEMPORAL_RECORDS {
        return None;
    }

    let mut buckets = [0usize; HOURS_PER_DAY];
    for record in &records {
        buckets[record.hour() as usize % HOURS_PER_DAY] += 1;
    }

    let mean_count = records.len() as f64 / HOURS_PER_DAY as f64;
    let peak_hours: Vec<u32> = buckets
        .iter()
        .enumerate()
        .filter(|(_, &count)| count as f64 > mean_count)
        .map(|(hour, _)| hour as u32)
        .collect();

    let frequency = peak_hours.len() as f64 / HOURS_PER_DAY as f64;
    debug!(%category, peaks = peak_hours.len(), "temporal pattern detected");

    Some(Pattern {
        id: format!("temporal-{category}"),
        kind: PatternKind::Temporal {
            category,
            peak_hours,
            timing_adjustment: PEAK_TIMING_ADJUSTMENT,
        },
        confidence: TEMPORAL_BASE_CONFIDENCE,
        frequency,
    })
}
