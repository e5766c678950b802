//! Execution sequencing — greedy scheduling against the time budget.

use tracing::debug;

use stratagem_core::types::pattern::find_temporal;
use stratagem_core::types::{EntityCategory, Pattern, PatternKind, ScheduledStep};

use crate::optimizer::{Assignment, Combination};

/// The ordered timeline plus the entities that did not fit the budget.
#[derive(Debug, Clone, Default)]
pub struct SequencedTimeline {
    pub steps: Vec<ScheduledStep>,
    /// Entity ids dropped whole: never partially executed or rescheduled.
    pub deferred: Vec<String>,
}

/// Duration multiplier for one assignment from a matching temporal pattern.
fn timing_adjustment(patterns: &[Pattern], category: EntityCategory) -> f64 {
    match find_temporal(patterns, category) {
        Some(p) => match &p.kind {
            PatternKind::Temporal {
                timing_adjustment, ..
            } => *timing_adjustment,
            _ => 1.0,
        },
        None => 1.0,
    }
}

/// Order the chosen pairs by entity time-sensitivity (descending, stable)
/// and greedily schedule them against the time budget.
///
/// A pair that does not fit the remaining budget is dropped entirely and
/// surfaced in `deferred`; the walk continues so later, shorter pairs can
/// still be scheduled.
pub fn sequence(
    combination: &Combination,
    patterns: &[Pattern],
    time_budget_hours: f64,
) -> SequencedTimeline {
    let mut ordered: Vec<&Assignment> = combination.assignments.iter().collect();
    ordered.sort_by(|a, b| {
        b.entity
            .time_sensitivity
            .partial_cmp(&a.entity.time_sensitivity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut timeline = SequencedTimeline::default();
    let mut clock = 0.0f64;

    for assignment in ordered {
        let adjustment = timing_adjustment(patterns, assignment.entity.category);
        let duration = assignment.evaluation.execution_time.mean * adjustment;

        if clock + duration <= time_budget_hours {
            timeline.steps.push(ScheduledStep {
                entity_id: assignment.entity.id.clone(),
                action_id: assignment.action.id.clone(),
                start_hour: clock,
                end_hour: clock + duration,
                success_rate: assignment.evaluation.success.mean,
                risk: assignment.evaluation.risk_level.mean,
            });
            clock += duration;
        } else {
            debug!(
                entity = %assignment.entity.id,
                duration,
                remaining = time_budget_hours - clock,
                "pair dropped from timeline"
            );
            timeline.deferred.push(assignment.entity.id.clone());
        }
    }

    timeline
}
