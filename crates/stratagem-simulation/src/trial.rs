//! A single Monte Carlo trial for one (action, entity) pair.

use rand::rngs::StdRng;
use rand::Rng;

use stratagem_core::config::{
    EXECUTION_TIME_NOISE, MIN_EXECUTION_TIME_HOURS, RESOURCE_NOISE, RISK_NOISE,
};
use stratagem_core::types::Action;

use crate::factors::timing_factor;
use crate::sampling::sample_normal;

/// Outcome of one stochastic trial.
///
/// Resource draws are aligned with the action's resource map iteration
/// order (BTreeMap, so the order is stable).
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    pub success: bool,
    pub execution_time: f64,
    pub risk_level: f64,
    pub detection_probability: f64,
    pub collateral_damage: f64,
    pub resources: Vec<f64>,
}

/// Run one trial.
///
/// `weather` and `intelligence` are the deterministic per-run factors;
/// the timing factor is drawn per trial from a uniform hour when a
/// temporal pattern matched.
pub fn run_trial(
    action: &Action,
    weather: f64,
    intelligence: f64,
    peak_hours: Option<&[u32]>,
    rng: &mut StdRng,
) -> TrialOutcome {
    let timing = match peak_hours {
        Some(peaks) => {
            let hour = rng.gen_range(0..24u32);
            timing_factor(hour, Some(peaks))
        }
        None => 1.0,
    };

    let raw_success = action.success_probability * weather * timing * intelligence;
    let adjusted_success = if raw_success.is_finite() {
        raw_success.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let success = rng.gen_bool(adjusted_success);

    let execution_time = (action.duration_hours
        + sample_normal(rng, 0.0, EXECUTION_TIME_NOISE * action.duration_hours))
    .max(MIN_EXECUTION_TIME_HOURS);

    let resources = action
        .resources
        .values()
        .map(|&req| (req + sample_normal(rng, 0.0, RESOURCE_NOISE * req)).max(0.0))
        .collect();

    let risk_level = (action.risk_level
        + sample_normal(rng, 0.0, RISK_NOISE * action.risk_level))
    .clamp(0.0, 100.0);
    let detection_probability = (action.detection_probability
        + sample_normal(rng, 0.0, RISK_NOISE * action.detection_probability))
    .clamp(0.0, 1.0);
    let collateral_damage = (action.collateral_damage
        + sample_normal(rng, 0.0, RISK_NOISE * action.collateral_damage))
    .clamp(0.0, 100.0);

    TrialOutcome {
        success,
        execution_time,
        risk_level,
        detection_probability,
        collateral_damage,
        resources,
    }
}
