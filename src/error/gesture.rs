//! Gesture contract errors.
//!
//! The controller performs no I/O, so the only way an input can fail is being
//! delivered in a phase that does not accept it. That is a host integration
//! bug, surfaced to the caller immediately and never retried.

use thiserror::Error;

use crate::gesture::{GestureOperation, GesturePhase};

/// Error returned by swipe controller inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureError {
    /// Input delivered in a phase that does not permit it.
    #[error("`{operation}` is not valid while the gesture is {phase}")]
    InvalidState {
        operation: GestureOperation,
        phase: GesturePhase,
    },
}

impl GestureError {
    pub fn invalid_state(operation: GestureOperation, phase: GesturePhase) -> Self {
        GestureError::InvalidState { operation, phase }
    }

    /// The rejected input.
    pub fn operation(&self) -> GestureOperation {
        match self {
            GestureError::InvalidState { operation, .. } => *operation,
        }
    }

    /// Phase the session was in when the input arrived.
    pub fn phase(&self) -> GesturePhase {
        match self {
            GestureError::InvalidState { phase, .. } => *phase,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            GestureError::InvalidState { .. } => "E_GESTURE_STATE",
        }
    }
}

/// Result of a controller input.
pub type GestureResult<T> = Result<T, GestureError>;
