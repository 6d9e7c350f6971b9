//! Gesture phases and the inputs each phase accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a swipe session on one row.
///
/// Sessions move Idle → Armed → Dragging ⇄ Committing → Settling → Idle.
/// The only shortcut is Armed → Idle (press released or cancelled before
/// any drag sample arrived).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    /// No session. The row sits at rest.
    #[default]
    Idle,
    /// Long press recognized; the row is lifted but has not moved yet.
    Armed,
    /// Row follows the pointer, inside the commit threshold.
    Dragging,
    /// Row follows the pointer, past the commit threshold.
    Committing,
    /// Pointer released; the row animates to its settle offset.
    Settling,
}

impl GesturePhase {
    /// True for every phase except `Idle`.
    pub fn is_live(&self) -> bool {
        !matches!(self, GesturePhase::Idle)
    }

    /// True while the pointer is down on the row.
    pub fn is_held(&self) -> bool {
        matches!(
            self,
            GesturePhase::Armed | GesturePhase::Dragging | GesturePhase::Committing
        )
    }

    /// Whether `operation` may be applied in this phase.
    pub fn permits(&self, operation: GestureOperation) -> bool {
        match operation {
            GestureOperation::Arm => matches!(self, GesturePhase::Idle),
            GestureOperation::DragSample | GestureOperation::DragEnd => self.is_held(),
            GestureOperation::Cancel => self.is_live(),
            GestureOperation::FinishSettle => matches!(self, GesturePhase::Settling),
        }
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::Armed => "armed",
            GesturePhase::Dragging => "dragging",
            GesturePhase::Committing => "committing",
            GesturePhase::Settling => "settling",
        }
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host inputs accepted by a swipe controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureOperation {
    Arm,
    DragSample,
    DragEnd,
    Cancel,
    FinishSettle,
}

impl GestureOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureOperation::Arm => "arm",
            GestureOperation::DragSample => "drag_sample",
            GestureOperation::DragEnd => "drag_end",
            GestureOperation::Cancel => "cancel",
            GestureOperation::FinishSettle => "finish_settle",
        }
    }
}

impl fmt::Display for GestureOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
