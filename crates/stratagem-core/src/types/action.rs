//! Actions — candidate courses of action with stochastic outcome models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Categories a course of action can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Surveillance,
    Interdiction,
    DirectAction,
    Disruption,
    Extraction,
}

impl ActionCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Surveillance => "surveillance",
            Self::Interdiction => "interdiction",
            Self::DirectAction => "direct_action",
            Self::Disruption => "disruption",
            Self::Extraction => "extraction",
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate course of action. Immutable per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub category: ActionCategory,
    /// Nominal execution duration in hours.
    pub duration_hours: f64,
    /// Nominal success probability, 0–1.
    pub success_probability: f64,
    /// Resource name → required quantity.
    pub resources: BTreeMap<String, f64>,
    /// Risk level, 0–100.
    pub risk_level: f64,
    /// Detection probability, 0–1.
    pub detection_probability: f64,
    /// Collateral damage score, 0–100.
    pub collateral_damage: f64,
    /// How much weather degrades this action, 0–1.
    pub weather_dependency: f64,
    /// How capable the action is at night, 0–1.
    pub night_capability: f64,
}
