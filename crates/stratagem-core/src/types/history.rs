//! Historical operation records consumed by the pattern engine.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::{ActionCategory, EntityCategory, ThreatTier};

/// One historical operation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub timestamp: DateTime<Utc>,
    pub entity_category: EntityCategory,
    pub action_category: ActionCategory,
    /// Observed success rate of the operation, 0–1.
    pub success_rate: f64,
    /// Observed response time in hours.
    pub response_time_hours: f64,
    pub threat_tier: ThreatTier,
    /// Free-form weather label, e.g. "clear", "fog".
    pub weather: String,
}

impl HistoricalRecord {
    /// Validate the record for ingestion.
    ///
    /// Returns the reason a record must be skipped; malformed records are
    /// never a fatal error at the ingestion boundary.
    pub fn validate(&self) -> Result<(), String> {
        if !self.success_rate.is_finite() || !(0.0..=1.0).contains(&self.success_rate) {
            return Err(format!("success_rate out of [0,1]: {}", self.success_rate));
        }
        if !self.response_time_hours.is_finite() || self.response_time_hours < 0.0 {
            return Err(format!(
                "response_time_hours negative or non-finite: {}",
                self.response_time_hours
            ));
        }
        if self.weather.trim().is_empty() {
            return Err("empty weather label".to_string());
        }
        Ok(())
    }

    /// Hour-of-day bucket (0–23) for temporal mining.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}
