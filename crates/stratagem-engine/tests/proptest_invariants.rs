//! Property-based tests for scheduling and ranking invariants.
//!
//! Fuzz-verifies:
//!   - the sequencer never exceeds the time budget
//!   - scheduled and deferred entities partition the combination
//!   - prioritization is deterministic and stable

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;

use stratagem_core::types::{
    Action, ActionCategory, AdjustmentFactors, ConfidenceInterval, Entity, EntityCategory,
    MetricStats, SimulationEvaluation, ThreatTier,
};
use stratagem_engine::prioritizer::{prioritize, priority_score};
use stratagem_engine::sequencer::sequence;
use stratagem_engine::{Assignment, Combination};

fn metric(mean: f64) -> MetricStats {
    MetricStats {
        mean,
        std_dev: 0.0,
        interval: ConfidenceInterval {
            lower: mean,
            upper: mean,
        },
    }
}

fn make_assignment(id: usize, time_sensitivity: f64, mean_time: f64) -> Assignment {
    Assignment {
        entity: Entity {
            id: format!("entity-{id}"),
            category: EntityCategory::Vehicle,
            threat_tier: ThreatTier::Medium,
            location: (0.0, 0.0),
            value: 50.0,
            protection: 50.0,
            time_sensitivity,
            mobility: 50.0,
            intel_quality: 70.0,
            collateral_risk: 10.0,
        },
        action: Action {
            id: format!("action-{id}"),
            category: ActionCategory::Interdiction,
            duration_hours: mean_time,
            success_probability: 0.7,
            resources: BTreeMap::new(),
            risk_level: 40.0,
            detection_probability: 0.3,
            collateral_damage: 10.0,
            weather_dependency: 0.2,
            night_capability: 0.5,
        },
        evaluation: Arc::new(SimulationEvaluation {
            success: metric(0.7),
            execution_time: metric(mean_time),
            risk_level: metric(40.0),
            detection_probability: metric(0.3),
            collateral_damage: metric(10.0),
            resources: BTreeMap::new(),
            adjustments: AdjustmentFactors {
                weather: 1.0,
                intelligence: 1.0,
                temporal_pattern: None,
            },
            trials: 100,
        }),
        score: 0.0,
    }
}

fn arb_entity(id: usize) -> impl Strategy<Value = Entity> {
    (
        0.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
        prop::sample::select(vec![
            ThreatTier::Low,
            ThreatTier::Medium,
            ThreatTier::High,
            ThreatTier::Critical,
        ]),
    )
        .prop_map(move |(value, protection, time_sensitivity, tier)| Entity {
            id: format!("entity-{id}"),
            category: EntityCategory::Personnel,
            threat_tier: tier,
            location: (0.0, 0.0),
            value,
            protection,
            time_sensitivity,
            mobility: 50.0,
            intel_quality: 70.0,
            collateral_risk: 10.0,
        })
}

proptest! {
    /// REGRESSION GATE: the cumulative scheduled duration never exceeds
    /// the time budget.
    #[test]
    fn sequencer_respects_budget(
        pairs in prop::collection::vec((0.0f64..=100.0, 0.01f64..=10.0), 0..12),
        budget in 0.0f64..=24.0,
    ) {
        let assignments: Vec<Assignment> = pairs
            .iter()
            .enumerate()
            .map(|(i, &(ts, time))| make_assignment(i, ts, time))
            .collect();
        let combination = Combination {
            assignments,
            success_rate: 0.7,
            risk_level: 40.0,
        };

        let timeline = sequence(&combination, &[], budget);
        let total: f64 = timeline.steps.iter().map(|s| s.duration_hours()).sum();
        prop_assert!(total <= budget + 1e-9, "scheduled {total} > budget {budget}");
    }

    /// Scheduled and deferred entities partition the combination exactly.
    #[test]
    fn sequencer_partitions_the_combination(
        pairs in prop::collection::vec((0.0f64..=100.0, 0.01f64..=10.0), 0..12),
        budget in 0.0f64..=24.0,
    ) {
        let assignments: Vec<Assignment> = pairs
            .iter()
            .enumerate()
            .map(|(i, &(ts, time))| make_assignment(i, ts, time))
            .collect();
        let total_pairs = assignments.len();
        let combination = Combination {
            assignments,
            success_rate: 0.7,
            risk_level: 40.0,
        };

        let timeline = sequence(&combination, &[], budget);
        prop_assert_eq!(timeline.steps.len() + timeline.deferred.len(), total_pairs);
        for deferred in &timeline.deferred {
            prop_assert!(timeline.steps.iter().all(|s| &s.entity_id != deferred));
        }
    }

    /// Prioritization is deterministic: ranking a ranking changes nothing.
    #[test]
    fn prioritize_is_idempotent(
        e0 in arb_entity(0),
        e1 in arb_entity(1),
        e2 in arb_entity(2),
        e3 in arb_entity(3),
    ) {
        let entities = vec![e0, e1, e2, e3];
        let once = prioritize(&entities);
        let twice = prioritize(&once);

        let ids_once: Vec<&str> = once.iter().map(|e| e.id.as_str()).collect();
        let ids_twice: Vec<&str> = twice.iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(ids_once, ids_twice);

        // And the ranking is actually ordered by score.
        for pair in once.windows(2) {
            prop_assert!(priority_score(&pair[0]) >= priority_score(&pair[1]));
        }
    }
}
