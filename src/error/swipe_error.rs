//! Unified error type for the crate.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::gesture::GestureError;
use super::replay::ReplayError;

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum SwipeError {
    #[error(transparent)]
    Gesture(#[from] GestureError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Replay(#[from] ReplayError),
}

impl SwipeError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SwipeError::Gesture(_) => ErrorCategory::Client,
            SwipeError::Config(ConfigError::Read { .. }) => ErrorCategory::System,
            SwipeError::Config(_) => ErrorCategory::Configuration,
            SwipeError::Replay(ReplayError::Read { .. }) => ErrorCategory::System,
            SwipeError::Replay(ReplayError::Parse(_) | ReplayError::UnknownRow { .. }) => {
                ErrorCategory::User
            }
            // A script that drives a row out of order is bad input, not a crate bug.
            SwipeError::Replay(ReplayError::Step { .. }) => ErrorCategory::User,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SwipeError::Gesture(err) => err.error_code(),
            SwipeError::Config(err) => err.error_code(),
            SwipeError::Replay(err) => err.error_code(),
        }
    }

    /// True when the host delivered gesture inputs out of order.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SwipeError::Gesture(_) | SwipeError::Replay(ReplayError::Step { .. })
        )
    }
}

/// Result alias using [`SwipeError`].
pub type SwipeResult<T> = Result<T, SwipeError>;
