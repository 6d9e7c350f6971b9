//! Per-row gesture session state and the snapshot handed to renderers.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::phase::GesturePhase;

/// Mutable state of one press-drag-release interaction.
///
/// Only the controller mutates a session. Hosts read it through
/// [`GestureSnapshot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureSession {
    pub(crate) phase: GesturePhase,
    pub(crate) vertical_offset: f64,
    pub(crate) predicted_end_offset: f64,
    pub(crate) committed: bool,
    pub(crate) started_at: Option<Instant>,
    pub(crate) settle_target: Option<f64>,
    pub(crate) settle_started_at: Option<Instant>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Current translation along the dismiss axis.
    pub fn vertical_offset(&self) -> f64 {
        self.vertical_offset
    }

    /// Latest velocity-extrapolated end translation from the host.
    pub fn predicted_end_offset(&self) -> f64 {
        self.predicted_end_offset
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// When the press was armed. `None` while idle.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// How long the row has been held, measured from arming.
    pub fn held_for(&self, now: Instant) -> Option<Duration> {
        self.started_at
            .map(|started| now.saturating_duration_since(started))
    }

    /// Offset chosen at release. `None` until the pointer lifts.
    pub fn settle_target(&self) -> Option<f64> {
        self.settle_target
    }

    pub fn settle_started_at(&self) -> Option<Instant> {
        self.settle_started_at
    }

    pub fn snapshot(&self) -> GestureSnapshot {
        GestureSnapshot {
            phase: self.phase,
            vertical_offset: self.vertical_offset,
            committed: self.committed,
            settle_target: self.settle_target,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Render-ready view of a session, read after every input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSnapshot {
    pub phase: GesturePhase,
    pub vertical_offset: f64,
    pub committed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_target: Option<f64>,
}

impl GestureSnapshot {
    /// Snapshot of a row with no session.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Row is held by the pointer and drawn slightly shrunk.
    pub fn is_lifted(&self) -> bool {
        self.phase.is_held()
    }

    /// Height of the discard hint revealed behind the row.
    pub fn reveal_height(&self) -> f64 {
        self.vertical_offset.abs()
    }
}
