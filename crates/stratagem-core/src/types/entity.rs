//! Entities — the objects of interest being ranked and targeted.

use serde::{Deserialize, Serialize};

/// Categories an entity can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Infrastructure,
    Installation,
    Vehicle,
    Personnel,
    Communications,
}

impl EntityCategory {
    /// All categories, in mining order.
    pub const ALL: &'static [EntityCategory] = &[
        Self::Infrastructure,
        Self::Installation,
        Self::Vehicle,
        Self::Personnel,
        Self::Communications,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Installation => "installation",
            Self::Vehicle => "vehicle",
            Self::Personnel => "personnel",
            Self::Communications => "communications",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordinal threat classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatTier {
    /// Prioritization score contribution for this tier.
    pub fn score(&self) -> f64 {
        match self {
            Self::Critical => 100.0,
            Self::High => 75.0,
            Self::Medium => 50.0,
            Self::Low => 25.0,
        }
    }

    /// Tier as a number (Low = 1 … Critical = 4), used for correlation.
    pub fn ordinal(&self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
            Self::Critical => 4.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// An entity under consideration. Immutable for the duration of a run.
///
/// All score fields are on a 0–100 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub category: EntityCategory,
    pub threat_tier: ThreatTier,
    /// (latitude, longitude) or any planar coordinate pair.
    pub location: (f64, f64),
    /// Strategic value.
    pub value: f64,
    /// Protection level; exposure is `100 − protection`.
    pub protection: f64,
    /// How quickly the opportunity degrades.
    pub time_sensitivity: f64,
    pub mobility: f64,
    /// Quality of the intelligence backing this entity's data.
    pub intel_quality: f64,
    /// Risk of collateral effects around this entity.
    pub collateral_risk: f64,
}
