//! Release decision: where a row settles when the pointer lifts.
//!
//! The rule weighs the final translation against the velocity-extrapolated
//! end translation reported by the host recognizer:
//!
//! 1. `predicted > fling` or (`final > commit` and `predicted > 0`) dismisses
//!    downward.
//! 2. `predicted < -fling` or (`final < commit` and `predicted < 0`)
//!    dismisses upward.
//! 3. Anything else settles back to rest.
//!
//! Rule 2 compares `final` against `+commit`, not `-commit`. Any release that
//! is still moving upward therefore dismisses, however short the drag. This
//! is the shipped behavior and is kept as is.

use serde::{Deserialize, Serialize};

use crate::config::SwipeConfig;

/// Direction a dismissed row leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissDirection {
    Down,
    Up,
}

impl DismissDirection {
    /// Sign applied to the dismiss offset.
    pub fn signum(&self) -> f64 {
        match self {
            DismissDirection::Down => 1.0,
            DismissDirection::Up => -1.0,
        }
    }
}

/// Outcome of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleDecision {
    Dismiss(DismissDirection),
    Cancel,
}

impl SettleDecision {
    /// Apply the release rule to a final and predicted end translation.
    pub fn resolve(final_delta_y: f64, predicted_end_delta_y: f64, config: &SwipeConfig) -> Self {
        let commit = config.commit_threshold;
        let fling = config.fling_threshold;

        if predicted_end_delta_y > fling || (final_delta_y > commit && predicted_end_delta_y > 0.0)
        {
            SettleDecision::Dismiss(DismissDirection::Down)
        } else if predicted_end_delta_y < -fling
            || (final_delta_y < commit && predicted_end_delta_y < 0.0)
        {
            SettleDecision::Dismiss(DismissDirection::Up)
        } else {
            SettleDecision::Cancel
        }
    }

    /// Offset the row animates to after release.
    pub fn target_offset(&self, config: &SwipeConfig) -> f64 {
        match self {
            SettleDecision::Dismiss(direction) => direction.signum() * config.dismiss_offset,
            SettleDecision::Cancel => 0.0,
        }
    }

    pub fn is_dismiss(&self) -> bool {
        matches!(self, SettleDecision::Dismiss(_))
    }
}
