//! Run constraints — time budget, available resources, environment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ActionCategory, EntityCategory};

/// Weather conditions at planning time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Visibility in arbitrary units; below 50 is degraded.
    pub visibility: f64,
    /// Wind speed; above 20 is degraded.
    pub wind_speed: f64,
    /// Precipitation intensity, 0–1.
    pub precipitation: f64,
}

impl Default for WeatherConditions {
    fn default() -> Self {
        Self {
            visibility: 100.0,
            wind_speed: 0.0,
            precipitation: 0.0,
        }
    }
}

/// Constraints for one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraints {
    /// Hard time budget in hours. Must be non-negative.
    pub time_budget_hours: f64,
    /// Resource name → available quantity.
    pub available_resources: BTreeMap<String, f64>,
    pub weather: WeatherConditions,
    /// Aggregate intelligence quality, 0–100.
    pub intel_quality: f64,
    /// Informational only; not enforced by this core.
    #[serde(default)]
    pub restricted_entity_categories: Vec<EntityCategory>,
    /// Informational only; not enforced by this core.
    #[serde(default)]
    pub restricted_action_categories: Vec<ActionCategory>,
}

impl Constraints {
    /// A permissive default: generous budget, clear weather, full intel.
    pub fn new(time_budget_hours: f64) -> Self {
        Self {
            time_budget_hours,
            available_resources: BTreeMap::new(),
            weather: WeatherConditions::default(),
            intel_quality: 100.0,
            restricted_entity_categories: Vec::new(),
            restricted_action_categories: Vec::new(),
        }
    }
}
