//! Behavioral pattern detection — response time vs. threat tier correlation.

use tracing::debug;

use stratagem_core::config::{MIN_BEHAVIORAL_CORRELATION, MIN_BEHAVIORAL_RECORDS};
use stratagem_core::stats::pearson;
use stratagem_core::types::{EntityCategory, Pattern, PatternKind};

use crate::history::HistoryStore;

/// Detect whether response time correlates with threat tier for a category.
///
/// Requires at least `MIN_BEHAVIORAL_RECORDS` records. Emits a pattern only
/// when |correlation| exceeds `MIN_BEHAVIORAL_CORRELATION`; the correlation
/// magnitude becomes the pattern's confidence.
pub fn detect_behavioral(history: &HistoryStore, category: EntityCategory) -> Option<Pattern> {
    let records = history.by_entity_category(category);
    if records.len() < MIN_BEHAVIORAL_RECORDS {
        return None;
    }

    let response_times: Vec<f64> = records.iter().map(|r| r.response_time_hours).collect();
    let threat_ordinals: Vec<f64> = records.iter().map(|r| r.threat_tier.ordinal()).collect();

    let correlation = pearson(&response_times, &threat_ordinals);
    if correlation.abs() <= MIN_BEHAVIORAL_CORRELATION {
        return None;
    }

    debug!(%category, correlation, "behavioral pattern detected");

    Some(Pattern {
        id: format!("behavioral-{category}"),
        kind: PatternKind::Behavioral {
            category,
            correlation,
        },
        confidence: correlation.abs(),
        frequency: 1.0,
    })
}
