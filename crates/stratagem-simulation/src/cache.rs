//! Memoization cache for simulation evaluations.
//!
//! Keyed by the strongly-typed composite (action id, entity id, time
//! budget); no TTL or invalidation — an evaluation is immutable once
//! computed. Tracks hits/misses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use stratagem_core::types::SimulationEvaluation;

/// Composite cache key. The f64 budget is stored as raw bits so the key
/// is `Eq + Hash` without string concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvalKey {
    pub action_id: String,
    pub entity_id: String,
    budget_bits: u64,
}

impl EvalKey {
    pub fn new(action_id: &str, entity_id: &str, time_budget_hours: f64) -> Self {
        Self {
            action_id: action_id.to_string(),
            entity_id: entity_id.to_string(),
            budget_bits: time_budget_hours.to_bits(),
        }
    }

    pub fn time_budget_hours(&self) -> f64 {
        f64::from_bits(self.budget_bits)
    }
}

/// Concurrency-safe evaluation cache with hit/miss tracking.
#[derive(Debug, Default)]
pub struct EvaluationCache {
    map: DashMap<EvalKey, Arc<SimulationEvaluation>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &EvalKey) -> Option<Arc<SimulationEvaluation>> {
        match self.map.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert an evaluation, returning the cached handle.
    ///
    /// Concurrent inserts of the same key are benign: both producers
    /// computed the same immutable value from the same seed.
    pub fn insert(&self, key: EvalKey, evaluation: SimulationEvaluation) -> Arc<SimulationEvaluation> {
        let value = Arc::new(evaluation);
        self.map.insert(key, Arc::clone(&value));
        value
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    pub fn entry_count(&self) -> usize {
        self.map.len()
    }
}
