//! The Stratagem data model — entities, actions, constraints, patterns,
//! historical records, simulation evaluations, and the persisted result.

pub mod action;
pub mod constraints;
pub mod entity;
pub mod evaluation;
pub mod history;
pub mod pattern;
pub mod result;

pub use action::{Action, ActionCategory};
pub use constraints::{Constraints, WeatherConditions};
pub use entity::{Entity, EntityCategory, ThreatTier};
pub use evaluation::{
    AdjustmentFactors, ConfidenceInterval, MetricStats, ResourceStats, SimulationEvaluation,
};
pub use history::HistoricalRecord;
pub use pattern::{Pattern, PatternKind};
pub use result::{OptimizationResult, RiskBreakdown, ScheduledStep};
