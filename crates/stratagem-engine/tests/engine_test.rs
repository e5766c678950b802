//! End-to-end tests for the optimization engine.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use stratagem_core::types::{
    Action, ActionCategory, Constraints, Entity, EntityCategory, HistoricalRecord, ThreatTier,
};
use stratagem_engine::{OptimizationEngine, ResultStore};
use stratagem_simulation::SimulationConfig;

fn entity(id: &str, value: f64, time_sensitivity: f64) -> Entity {
    Entity {
        id: id.to_string(),
        category: EntityCategory::Installation,
        threat_tier: ThreatTier::High,
        location: (12.5, 44.1),
        value,
        protection: 35.0,
        time_sensitivity,
        mobility: 25.0,
        intel_quality: 80.0,
        collateral_risk: 20.0,
    }
}

fn action(id: &str, duration: f64, success: f64, resources: &[(&str, f64)]) -> Action {
    Action {
        id: id.to_string(),
        category: ActionCategory::DirectAction,
        duration_hours: duration,
        success_probability: success,
        resources: resources
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<String, f64>>(),
        risk_level: 45.0,
        detection_probability: 0.3,
        collateral_damage: 20.0,
        weather_dependency: 0.3,
        night_capability: 0.6,
    }
}

fn scenario() -> (Vec<Entity>, Vec<Action>, Constraints) {
    let entities = vec![
        entity("alpha", 95.0, 90.0),
        entity("bravo", 80.0, 70.0),
        entity("charlie", 100.0, 95.0),
    ];
    let actions = vec![
        action("strike", 4.0, 0.75, &[("fuel", 120.0), ("ammunition", 40.0)]),
        action("raid", 1.5, 0.85, &[("crew", 8.0)]),
        action("disrupt", 2.0, 0.70, &[("fuel", 30.0)]),
    ];
    (entities, actions, Constraints::new(12.0))
}

fn seeded_engine(seed: u64) -> OptimizationEngine {
    OptimizationEngine::with_config(&SimulationConfig {
        trials: 10_000,
        seed: Some(seed),
    })
}

#[test]
fn end_to_end_scenario() {
    let (entities, actions, constraints) = scenario();
    let engine = seeded_engine(42);
    let result = engine.optimize(&entities, &actions, &constraints).unwrap();

    assert!(result.timeline.len() <= 3);
    assert!(result.expected_success_rate > 0.0 && result.expected_success_rate < 1.0);
    assert!(result.scheduled_hours() <= constraints.time_budget_hours);

    // Every resource referenced by a chosen action appears in the totals.
    for step in &result.timeline {
        let chosen = actions.iter().find(|a| a.id == step.action_id).unwrap();
        for name in chosen.resources.keys() {
            assert!(
                result.resource_totals.contains_key(name),
                "missing resource {name}"
            );
        }
    }

    // The ranking covers all entities, highest priority first.
    assert_eq!(result.ranked_entities.len(), 3);
    assert_eq!(result.ranked_entities[0], "charlie");
    assert!(result.combined_interval.is_valid());
}

#[test]
fn same_seed_is_bit_identical_end_to_end() {
    let (entities, actions, constraints) = scenario();

    let r1 = seeded_engine(777)
        .optimize(&entities, &actions, &constraints)
        .unwrap();
    let r2 = seeded_engine(777)
        .optimize(&entities, &actions, &constraints)
        .unwrap();

    assert_eq!(r1.expected_success_rate, r2.expected_success_rate);
    assert_eq!(r1.risk_breakdown.total, r2.risk_breakdown.total);
    assert_eq!(r1.risk_breakdown.detection, r2.risk_breakdown.detection);
    assert_eq!(r1.resource_totals, r2.resource_totals);
    assert_eq!(r1.combined_interval, r2.combined_interval);
    assert_eq!(r1.timeline, r2.timeline);
    assert_eq!(r1.ranked_entities, r2.ranked_entities);
}

#[test]
fn tight_budget_defers_entities() {
    let (entities, actions, _) = scenario();
    // Budget fits roughly one short action.
    let constraints = Constraints::new(2.0);
    let result = seeded_engine(9)
        .optimize(&entities, &actions, &constraints)
        .unwrap();

    assert!(result.scheduled_hours() <= 2.0);
    assert!(!result.deferred.is_empty());
    // Scheduled and deferred partition the chosen combination.
    for id in &result.deferred {
        assert!(result.timeline.iter().all(|s| &s.entity_id != id));
    }
}

#[test]
fn zero_budget_schedules_nothing() {
    let (entities, actions, _) = scenario();
    let result = seeded_engine(5)
        .optimize(&entities, &actions, &Constraints::new(0.0))
        .unwrap();
    assert!(result.timeline.is_empty());
    assert_eq!(result.expected_success_rate, 0.0);
}

#[test]
fn completed_run_is_persisted() {
    let (entities, actions, constraints) = scenario();
    let engine = seeded_engine(11).with_store(ResultStore::open_in_memory().unwrap());

    let result = engine.optimize(&entities, &actions, &constraints).unwrap();

    let store = engine.store().unwrap();
    let loaded = store.get(&result.run_id).unwrap().unwrap();
    assert_eq!(loaded.run_id, result.run_id);
    assert_eq!(loaded.timeline.len(), result.timeline.len());
    assert_eq!(store.list_run_ids().unwrap(), vec![result.run_id.clone()]);
}

#[test]
fn history_drives_patterns_into_the_result() {
    let (entities, actions, constraints) = scenario();
    let mut engine = seeded_engine(21);

    // Enough installation records at 08:00 to clear the temporal floor.
    for i in 0..12u32 {
        engine.add_historical_record(HistoricalRecord {
            timestamp: Utc.with_ymd_and_hms(2025, 7, (i % 28) + 1, 8, 0, 0).unwrap(),
            entity_category: EntityCategory::Installation,
            action_category: ActionCategory::DirectAction,
            success_rate: 0.8,
            response_time_hours: 1.0,
            threat_tier: ThreatTier::High,
            weather: "clear".to_string(),
        });
    }

    let result = engine.optimize(&entities, &actions, &constraints).unwrap();
    assert!(!result.patterns.is_empty());
    // The mined pattern set rides along on the audit record.
    assert!(result
        .patterns
        .iter()
        .any(|p| p.id == "temporal-installation"));
}

#[test]
fn malformed_history_is_skipped_without_failing_the_run() {
    let (entities, actions, constraints) = scenario();
    let mut engine = seeded_engine(3);

    let accepted = engine.add_historical_record(HistoricalRecord {
        timestamp: Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap(),
        entity_category: EntityCategory::Vehicle,
        action_category: ActionCategory::Surveillance,
        success_rate: 7.0, // out of range
        response_time_hours: 1.0,
        threat_tier: ThreatTier::Low,
        weather: "clear".to_string(),
    });
    assert!(!accepted);

    let result = engine.optimize(&entities, &actions, &constraints).unwrap();
    assert!(result.patterns.is_empty());
    assert!(!result.timeline.is_empty());
}
