//! Property-based tests for simulator invariants.
//!
//! Fuzz-verifies across randomized actions, entities, and constraints:
//!   - probability-valued outputs stay in [0, 1]
//!   - resource consumption is never negative
//!   - confidence intervals are ordered and centered

use proptest::prelude::*;

use stratagem_core::types::{
    Action, ActionCategory, Constraints, Entity, EntityCategory, ThreatTier, WeatherConditions,
};
use stratagem_simulation::StrategySimulator;

fn arb_action() -> impl Strategy<Value = Action> {
    (
        0.0f64..=1.0,
        0.0f64..=10.0,
        0.0f64..=100.0,
        0.0f64..=1.0,
        0.0f64..=100.0,
        0.0f64..=1.0,
        prop::collection::btree_map("[a-z]{3,8}", 0.0f64..=500.0, 0..4),
    )
        .prop_map(
            |(success, duration, risk, detection, collateral, weather_dep, resources)| Action {
                id: "fuzz-action".to_string(),
                category: ActionCategory::Disruption,
                duration_hours: duration,
                success_probability: success,
                resources,
                risk_level: risk,
                detection_probability: detection,
                collateral_damage: collateral,
                weather_dependency: weather_dep,
                night_capability: 0.5,
            },
        )
}

fn arb_constraints() -> impl Strategy<Value = Constraints> {
    (
        0.0f64..=48.0,
        0.0f64..=100.0,
        0.0f64..=150.0,
        0.0f64..=60.0,
        0.0f64..=1.0,
    )
        .prop_map(|(budget, intel, visibility, wind, precipitation)| {
            let mut c = Constraints::new(budget);
            c.intel_quality = intel;
            c.weather = WeatherConditions {
                visibility,
                wind_speed: wind,
                precipitation,
            };
            c
        })
}

fn fuzz_entity() -> Entity {
    Entity {
        id: "fuzz-entity".to_string(),
        category: EntityCategory::Infrastructure,
        threat_tier: ThreatTier::Medium,
        location: (0.0, 0.0),
        value: 50.0,
        protection: 50.0,
        time_sensitivity: 50.0,
        mobility: 50.0,
        intel_quality: 50.0,
        collateral_risk: 50.0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// REGRESSION GATE: every probability-valued output is in [0, 1].
    #[test]
    fn probabilities_bounded(action in arb_action(), constraints in arb_constraints(), seed in any::<u64>()) {
        let sim = StrategySimulator::new(300).with_seed(seed);
        let eval = sim.evaluate(&action, &fuzz_entity(), &constraints, &[]);

        prop_assert!((0.0..=1.0).contains(&eval.success.mean));
        prop_assert!((0.0..=1.0).contains(&eval.detection_probability.mean));
        prop_assert!((0.0..=100.0).contains(&eval.risk_level.mean));
        prop_assert!((0.0..=100.0).contains(&eval.collateral_damage.mean));
    }

    /// REGRESSION GATE: simulated resource consumption is never negative.
    #[test]
    fn resources_non_negative(action in arb_action(), constraints in arb_constraints(), seed in any::<u64>()) {
        let sim = StrategySimulator::new(300).with_seed(seed);
        let eval = sim.evaluate(&action, &fuzz_entity(), &constraints, &[]);

        for stats in eval.resources.values() {
            prop_assert!(stats.min >= 0.0, "negative consumption: {}", stats.min);
            prop_assert!(stats.mean >= 0.0);
        }
    }

    /// Confidence intervals are ordered and contain their mean.
    #[test]
    fn intervals_are_valid(action in arb_action(), constraints in arb_constraints(), seed in any::<u64>()) {
        let sim = StrategySimulator::new(300).with_seed(seed);
        let eval = sim.evaluate(&action, &fuzz_entity(), &constraints, &[]);

        for stats in [
            &eval.success,
            &eval.execution_time,
            &eval.risk_level,
            &eval.detection_probability,
            &eval.collateral_damage,
        ] {
            prop_assert!(stats.interval.is_valid());
            prop_assert!(stats.interval.lower <= stats.mean);
            prop_assert!(stats.mean <= stats.interval.upper);
        }
    }

    /// Execution time respects the floor even for zero-duration actions.
    #[test]
    fn execution_time_floored(action in arb_action(), seed in any::<u64>()) {
        let mut action = action;
        action.duration_hours = 0.0;
        let sim = StrategySimulator::new(300).with_seed(seed);
        let eval = sim.evaluate(&action, &fuzz_entity(), &Constraints::new(12.0), &[]);
        prop_assert!(eval.execution_time.mean >= 0.1);
    }
}
