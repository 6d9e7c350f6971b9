//! Replay script errors.

use std::path::PathBuf;

use thiserror::Error;

use super::gesture::GestureError;

/// Failure while loading or playing a replay script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read replay script {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse replay script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Step {step} arms row `{row}`, which is not in the row list")]
    UnknownRow { step: usize, row: String },

    #[error("Step {step} on row `{row}` failed: {source}")]
    Step {
        step: usize,
        row: String,
        #[source]
        source: GestureError,
    },
}

impl ReplayError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ReplayError::Read { .. } => "E_REPLAY_READ",
            ReplayError::Parse(_) => "E_REPLAY_PARSE",
            ReplayError::UnknownRow { .. } => "E_REPLAY_ROW",
            ReplayError::Step { .. } => "E_REPLAY_STEP",
        }
    }

    /// Index of the failing step.
    pub fn step(&self) -> Option<usize> {
        match self {
            ReplayError::UnknownRow { step, .. } | ReplayError::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}
