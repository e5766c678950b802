//! The Monte Carlo strategy simulator.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use stratagem_core::config::DEFAULT_TRIALS;
use stratagem_core::types::pattern::find_temporal;
use stratagem_core::types::{
    Action, AdjustmentFactors, Constraints, Entity, Pattern, PatternKind, SimulationEvaluation,
};

use crate::aggregate::{metric_stats, resource_stats};
use crate::cache::{EvalKey, EvaluationCache};
use crate::factors::{intelligence_factor, weather_factor};
use crate::sampling::pair_seed;
use crate::trial::run_trial;

/// Configuration for the Monte Carlo simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of trials per (action, entity) pair.
    pub trials: u32,
    /// Random seed (None = non-deterministic).
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

/// Evaluates (action, entity, constraints, patterns) tuples by repeated
/// stochastic trials, memoizing each evaluation by its composite key.
///
/// Trials run in parallel; each trial derives its own RNG from the run
/// seed, the pair identity, and the trial index, so results for a fixed
/// seed are bit-identical regardless of thread scheduling.
pub struct StrategySimulator {
    trials: u32,
    seed_base: u64,
    cache: EvaluationCache,
}

impl StrategySimulator {
    /// Create a simulator with the given trial count and a random seed.
    pub fn new(trials: u32) -> Self {
        Self {
            trials: trials.max(1),
            seed_base: rand::thread_rng().next_u64(),
            cache: EvaluationCache::new(),
        }
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed_base = seed;
        self
    }

    /// Build from a config, honoring its optional seed.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let sim = Self::new(config.trials);
        match config.seed {
            Some(seed) => sim.with_seed(seed),
            None => sim,
        }
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn cache(&self) -> &EvaluationCache {
        &self.cache
    }

    /// Evaluate one (action, entity) pair under the given constraints and
    /// pattern set.
    ///
    /// A repeated call with the same (action id, entity id, time budget)
    /// key returns the cached evaluation unchanged, performing no random
    /// draws.
    pub fn evaluate(
        &self,
        action: &Action,
        entity: &Entity,
        constraints: &Constraints,
        patterns: &[Pattern],
    ) -> Arc<SimulationEvaluation> {
        let key = EvalKey::new(&action.id, &entity.id, constraints.time_budget_hours);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let weather = weather_factor(action, &constraints.weather);
        let intelligence = intelligence_factor(constraints.intel_quality);
        let temporal = find_temporal(patterns, entity.category);
        let peak_hours: Option<&[u32]> = temporal.and_then(|p| match &p.kind {
            PatternKind::Temporal { peak_hours, .. } => Some(peak_hours.as_slice()),
            _ => None,
        });

        debug!(
            action = %action.id,
            entity = %entity.id,
            trials = self.trials,
            "simulating pair"
        );

        let seed = pair_seed(self.seed_base, &entity.id, &action.id);
        let outcomes: Vec<_> = (0..self.trials as u64)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
                run_trial(action, weather, intelligence, peak_hours, &mut rng)
            })
            .collect();

        let successes: Vec<f64> = outcomes
            .iter()
            .map(|o| if o.success { 1.0 } else { 0.0 })
            .collect();
        let times: Vec<f64> = outcomes.iter().map(|o| o.execution_time).collect();
        let risks: Vec<f64> = outcomes.iter().map(|o| o.risk_level).collect();
        let detections: Vec<f64> = outcomes.iter().map(|o| o.detection_probability).collect();
        let collaterals: Vec<f64> = outcomes.iter().map(|o| o.collateral_damage).collect();

        let evaluation = SimulationEvaluation {
            success: metric_stats(&successes),
            execution_time: metric_stats(&times),
            risk_level: metric_stats(&risks),
            detection_probability: metric_stats(&detections),
            collateral_damage: metric_stats(&collaterals),
            resources: resource_stats(action, &outcomes),
            adjustments: AdjustmentFactors {
                weather,
                intelligence,
                temporal_pattern: temporal.map(|p| p.id.clone()),
            },
            trials: self.trials,
        };

        self.cache.insert(key, evaluation)
    }
}
