//! The optimization engine — staged orchestration of one run.
//!
//! MINING → SIMULATING → OPTIMIZING → SEQUENCING, each stage producing the
//! input of the next. A failure in any stage aborts the run atomically: no
//! partial result is returned or persisted.

use std::panic::AssertUnwindSafe;
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;
use uuid::Uuid;

use stratagem_core::errors::{EngineError, EngineResult, Stage};
use stratagem_core::types::{
    Action, Constraints, Entity, HistoricalRecord, OptimizationResult, Pattern,
};
use stratagem_patterns::PatternEngine;
use stratagem_simulation::{SimulationConfig, StrategySimulator};

use crate::aggregator::aggregate;
use crate::optimizer::select_combination;
use crate::prioritizer::prioritize;
use crate::sequencer::sequence;
use crate::store::ResultStore;

/// The single entry point to the strategy optimization engine.
///
/// Owns the pattern engine (and its history), the memoizing simulator,
/// and an optional result store for persisting the audit record.
pub struct OptimizationEngine {
    pattern_engine: PatternEngine,
    simulator: StrategySimulator,
    store: Option<ResultStore>,
}

impl OptimizationEngine {
    /// Create an engine with the default simulation config.
    pub fn new() -> Self {
        Self::with_config(&SimulationConfig::default())
    }

    /// Create an engine with an explicit trial count and optional seed.
    pub fn with_config(config: &SimulationConfig) -> Self {
        Self {
            pattern_engine: PatternEngine::new(),
            simulator: StrategySimulator::from_config(config),
            store: None,
        }
    }

    /// Attach a result store; every completed run is persisted to it.
    pub fn with_store(mut self, store: ResultStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Ingest one historical record; malformed records are skipped.
    pub fn add_historical_record(&mut self, record: HistoricalRecord) -> bool {
        self.pattern_engine.add_record(record)
    }

    pub fn pattern_engine(&self) -> &PatternEngine {
        &self.pattern_engine
    }

    pub fn simulator(&self) -> &StrategySimulator {
        &self.simulator
    }

    pub fn store(&self) -> Option<&ResultStore> {
        self.store.as_ref()
    }

    /// Run one optimization: mine patterns, simulate every candidate pair,
    /// select the best combination, and schedule it against the budget.
    ///
    /// Empty `entities` or `actions` are not an error: the run completes
    /// with an empty timeline and a success rate of 0.
    pub fn optimize(
        &self,
        entities: &[Entity],
        actions: &[Action],
        constraints: &Constraints,
    ) -> EngineResult<OptimizationResult> {
        if !constraints.time_budget_hours.is_finite() || constraints.time_budget_hours < 0.0 {
            return Err(EngineError::InvalidConstraints {
                reason: format!(
                    "time budget must be non-negative, got {}",
                    constraints.time_budget_hours
                ),
            });
        }

        let run_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        info!(%run_id, entities = entities.len(), actions = actions.len(), "run started");

        let patterns: Vec<Pattern> =
            run_stage(Stage::Mining, || self.pattern_engine.mine_all())?;

        // Every candidate pair is simulated up front, in parallel; the
        // optimizer then reads the memoized evaluations.
        run_stage(Stage::Simulating, || {
            entities.par_iter().for_each(|entity| {
                for action in actions {
                    self.simulator.evaluate(action, entity, constraints, &patterns);
                }
            });
        })?;
        info!(
            %run_id,
            pairs = self.simulator.cache().entry_count(),
            "simulation complete"
        );

        let (ranked, combination) = run_stage(Stage::Optimizing, || {
            let ranked = prioritize(entities);
            let combination =
                select_combination(&ranked, actions, constraints, &patterns, &self.simulator);
            (ranked, combination)
        })?;

        let timeline = run_stage(Stage::Sequencing, || {
            sequence(&combination, &patterns, constraints.time_budget_hours)
        })?;

        let ranked_ids = ranked.iter().map(|e| e.id.clone()).collect();
        let result = aggregate(
            run_id,
            ranked_ids,
            &combination,
            timeline,
            patterns,
            start.elapsed().as_millis() as u64,
        );

        if let Some(store) = &self.store {
            store.save(&result)?;
        }

        info!(
            run_id = %result.run_id,
            scheduled = result.timeline.len(),
            deferred = result.deferred.len(),
            success_rate = result.expected_success_rate,
            duration_ms = result.duration_ms,
            "run complete"
        );
        Ok(result)
    }
}

impl Default for OptimizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one stage, converting an unexpected panic into a stage-tagged
/// failure so the caller receives a single signal identifying where the
/// run died.
fn run_stage<T, F: FnOnce() -> T>(stage: Stage, f: F) -> EngineResult<T> {
    std::panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unexpected panic".to_string());
        EngineError::in_stage(stage, reason)
    })
}
