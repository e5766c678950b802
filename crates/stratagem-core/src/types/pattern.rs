//! Mined patterns — statistically supported regularities from history.

use serde::{Deserialize, Serialize};

use super::EntityCategory;

/// Kind-specific pattern payload.
///
/// Dispatch is always an exhaustive `match`; the kind is part of the type,
/// never a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternKind {
    /// Hour-of-day regularity for one entity category.
    Temporal {
        category: EntityCategory,
        /// Hours (0–23) with above-average activity.
        peak_hours: Vec<u32>,
        /// Execution-duration multiplier when scheduling inside known
        /// peak windows.
        timing_adjustment: f64,
    },
    /// Response time correlates with threat tier for one entity category.
    Behavioral {
        category: EntityCategory,
        /// Pearson correlation between response time and threat ordinal.
        correlation: f64,
    },
    /// Weather label with the best historical success rate.
    Environmental {
        best_weather: String,
        avg_success: f64,
    },
}

/// A mined pattern. Read-only input to an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    #[serde(flatten)]
    pub kind: PatternKind,
    /// How strongly the evidence supports this pattern, 0–1.
    pub confidence: f64,
    /// How often the pattern applies, 0–1.
    pub frequency: f64,
}

impl Pattern {
    /// Whether this is a temporal pattern mined for the given category.
    pub fn is_temporal_for(&self, category: EntityCategory) -> bool {
        matches!(&self.kind, PatternKind::Temporal { category: c, .. } if *c == category)
    }
}

/// The first temporal pattern matching an entity category, if any.
pub fn find_temporal(patterns: &[Pattern], category: EntityCategory) -> Option<&Pattern> {
    patterns.iter().find(|p| p.is_temporal_for(category))
}
