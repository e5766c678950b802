//! Engine errors and the run stage machine.

use serde::{Deserialize, Serialize};

/// Result alias used across the Stratagem crates.
pub type EngineResult<T> = Result<T, EngineError>;

/// The four ordered stages of an optimization run.
///
/// MINING → SIMULATING → OPTIMIZING → SEQUENCING, no loop-back. A failure
/// in any stage aborts the run; the stage is carried on the error so the
/// caller receives a single failure signal identifying where the run died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Mining,
    Simulating,
    Optimizing,
    Sequencing,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mining => "mining",
            Self::Simulating => "simulating",
            Self::Optimizing => "optimizing",
            Self::Sequencing => "sequencing",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level engine errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid constraints: {reason}")]
    InvalidConstraints { reason: String },

    #[error("stage {stage} failed: {reason}")]
    StageFailed { stage: Stage, reason: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Wrap an arbitrary failure with the stage it occurred in.
    pub fn in_stage(stage: Stage, reason: impl Into<String>) -> Self {
        Self::StageFailed {
            stage,
            reason: reason.into(),
        }
    }
}
