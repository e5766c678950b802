//! # stratagem-simulation
//!
//! Monte Carlo strategy simulator. Evaluates one (action, entity,
//! constraints, patterns) tuple by running repeated stochastic trials in
//! parallel and aggregating them into means, standard deviations, and 95%
//! confidence intervals. Evaluations are memoized by a strongly-typed
//! composite key; with an explicit seed, results are bit-reproducible.

pub mod aggregate;
pub mod cache;
pub mod factors;
pub mod sampling;
pub mod simulator;
pub mod trial;

pub use cache::{EvalKey, EvaluationCache};
pub use simulator::{SimulationConfig, StrategySimulator};
