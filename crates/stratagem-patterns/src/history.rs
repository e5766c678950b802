//! In-memory store of historical operation records.

use tracing::warn;

use stratagem_core::types::{EntityCategory, HistoricalRecord};

/// Ordered store of validated historical records.
///
/// Malformed records are logged and skipped, never a fatal error; mining
/// proceeds with whatever valid data exists.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<HistoricalRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning whether it was accepted.
    pub fn add(&mut self, record: HistoricalRecord) -> bool {
        match record.validate() {
            Ok(()) => {
                self.records.push(record);
                true
            }
            Err(reason) => {
                warn!(%reason, "skipping malformed historical record");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Records for one entity category, in insertion order.
    pub fn by_entity_category(&self, category: EntityCategory) -> Vec<&HistoricalRecord> {
        self.records
            .iter()
            .filter(|r| r.entity_category == category)
            .collect()
    }
}
