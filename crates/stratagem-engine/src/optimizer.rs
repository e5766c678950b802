//! Action–entity optimization — per-entity feasible-action selection.

use std::sync::Arc;

use tracing::debug;

use stratagem_core::config::{W_RISK, W_SUCCESS};
use stratagem_core::stats::mean;
use stratagem_core::types::{
    Action, Constraints, Entity, Pattern, SimulationEvaluation,
};
use stratagem_simulation::StrategySimulator;

/// One chosen (entity, action) pair with its simulation evaluation.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub entity: Entity,
    pub action: Action,
    pub evaluation: Arc<SimulationEvaluation>,
    /// The risk-adjusted score that won this action its slot.
    pub score: f64,
}

/// The selected set of (entity, action) pairs, prior to scheduling.
#[derive(Debug, Clone, Default)]
pub struct Combination {
    pub assignments: Vec<Assignment>,
    /// Unweighted mean success rate across the chosen pairs.
    pub success_rate: f64,
    /// Unweighted mean risk level across the chosen pairs.
    pub risk_level: f64,
}

/// Risk-adjusted score for one evaluation: reward success, penalize risk.
pub fn action_score(evaluation: &SimulationEvaluation) -> f64 {
    W_SUCCESS * evaluation.success.mean - W_RISK * (evaluation.risk_level.mean / 100.0)
}

/// Select the best feasible action for every entity.
///
/// Pairs whose mean execution time exceeds the time budget are skipped;
/// an entity with no feasible action is silently excluded. Among feasible
/// actions the strictly greatest score wins, so the first action reaching
/// a given maximum keeps its slot.
///
/// Combination-level success and risk are unweighted arithmetic means
/// across the chosen pairs — a documented simplification, not
/// value-weighted.
pub fn select_combination(
    entities: &[Entity],
    actions: &[Action],
    constraints: &Constraints,
    patterns: &[Pattern],
    simulator: &StrategySimulator,
) -> Combination {
    let mut assignments = Vec::new();

    for entity in entities {
        let mut best: Option<Assignment> = None;

        for action in actions {
            let evaluation = simulator.evaluate(action, entity, constraints, patterns);
            if evaluation.execution_time.mean > constraints.time_budget_hours {
                debug!(
                    entity = %entity.id,
                    action = %action.id,
                    mean_time = evaluation.execution_time.mean,
                    "pair exceeds time budget, skipped"
                );
                continue;
            }

            let score = action_score(&evaluation);
            let improves = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if improves {
                best = Some(Assignment {
                    entity: entity.clone(),
                    action: action.clone(),
                    evaluation,
                    score,
                });
            }
        }

        if let Some(assignment) = best {
            assignments.push(assignment);
        }
    }

    let successes: Vec<f64> = assignments
        .iter()
        .map(|a| a.evaluation.success.mean)
        .collect();
    let risks: Vec<f64> = assignments
        .iter()
        .map(|a| a.evaluation.risk_level.mean)
        .collect();

    Combination {
        success_rate: mean(&successes),
        risk_level: mean(&risks),
        assignments,
    }
}
