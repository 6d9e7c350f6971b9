//! Error types.
//!
//! | Type | Raised by | Category |
//! |------|-----------|----------|
//! | [`GestureError`] | controller and registry inputs | Client |
//! | [`ConfigError`] | [`SwipeConfig`](crate::config::SwipeConfig) loading | Configuration / System |
//! | [`ReplayError`] | replay scripts | User / System |
//!
//! [`SwipeError`] unifies them for callers that handle all three.

mod category;
mod config;
mod gesture;
mod replay;
mod swipe_error;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use gesture::{GestureError, GestureResult};
pub use replay::ReplayError;
pub use swipe_error::{SwipeError, SwipeResult};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::gesture::{GestureOperation, GesturePhase};
    use std::path::PathBuf;

    #[test]
    fn test_error_unification() {
        let gesture: SwipeError =
            GestureError::invalid_state(GestureOperation::Arm, GesturePhase::Dragging).into();
        let config: SwipeError = ConfigError::InvalidValue {
            field: "commit_threshold",
            reason: "must be positive".to_string(),
        }
        .into();
        let read: SwipeError = ConfigError::Read {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .into();
        let parse: SwipeError = ReplayError::from(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        )
        .into();

        assert_eq!(gesture.category(), ErrorCategory::Client);
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(read.category(), ErrorCategory::System);
        assert_eq!(parse.category(), ErrorCategory::User);

        assert_eq!(gesture.error_code(), "E_GESTURE_STATE");
        assert_eq!(config.error_code(), "E_CONFIG_VALUE");
        assert_eq!(read.error_code(), "E_CONFIG_READ");
        assert_eq!(parse.error_code(), "E_REPLAY_PARSE");
    }

    #[test]
    fn test_contract_violations() {
        let source = GestureError::invalid_state(GestureOperation::DragEnd, GesturePhase::Idle);
        let step: SwipeError = ReplayError::Step {
            step: 3,
            row: "t3_abc".to_string(),
            source,
        }
        .into();
        assert!(step.is_contract_violation());
        assert!(SwipeError::from(source).is_contract_violation());
        assert_eq!(
            step.to_string(),
            "Step 3 on row `t3_abc` failed: `drag_end` is not valid while the gesture is idle"
        );

        let config: SwipeError = ConfigError::InvalidValue {
            field: "dismiss_offset",
            reason: "must be positive".to_string(),
        }
        .into();
        assert!(!config.is_contract_violation());
        assert!(!config.category().recovery_hint().is_empty());
    }
}
