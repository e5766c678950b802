//! The pattern engine — owns the history store and runs all detectors.

use tracing::info;

use stratagem_core::types::{EntityCategory, HistoricalRecord, Pattern};

use crate::detectors::{detect_behavioral, detect_environmental, detect_temporal};
use crate::history::HistoryStore;

/// Mines the historical record store for patterns.
///
/// Patterns accumulate value across runs if the history is retained; the
/// engine itself is cheap to query repeatedly.
#[derive(Debug, Default)]
pub struct PatternEngine {
    history: HistoryStore,
}

impl PatternEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one historical record; malformed records are skipped.
    pub fn add_record(&mut self, record: HistoricalRecord) -> bool {
        self.history.add(record)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Temporal pattern for one entity category, if the evidence supports one.
    pub fn temporal_patterns(&self, category: EntityCategory) -> Option<Pattern> {
        detect_temporal(&self.history, category)
    }

    /// Behavioral pattern for one entity category, if the evidence supports one.
    pub fn behavioral_patterns(&self, category: EntityCategory) -> Option<Pattern> {
        detect_behavioral(&self.history, category)
    }

    /// Environmental pattern across all records, if the evidence supports one.
    pub fn environmental_patterns(&self) -> Option<Pattern> {
        detect_environmental(&self.history)
    }

    /// Run every detector over every entity category.
    pub fn mine_all(&self) -> Vec<Pattern> {
        let mut patterns = Vec::new();
        for &category in EntityCategory::ALL {
            patterns.extend(self.temporal_patterns(category));
            patterns.extend(self.behavioral_patterns(category));
        }
        patterns.extend(self.environmental_patterns());
        info!(
            records = self.history.len(),
            patterns = patterns.len(),
            "pattern mining complete"
        );
        patterns
    }
}
