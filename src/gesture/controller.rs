//! Swipe-to-dismiss controller for a single row.
//!
//! The host feeds recognizer callbacks in, reads a [`GestureSnapshot`] back
//! after each one, and receives [`SwipeEvent`]s through its sink.
//!
//! ```
//! use swipe_dismiss::gesture::{GesturePhase, SwipeDismissController, SwipeEvent};
//!
//! let mut row = SwipeDismissController::new("t3_abc", Vec::<SwipeEvent<&str>>::new());
//! row.arm().unwrap();
//! row.drag_sample(85.0, 120.0).unwrap();
//! let snapshot = row.drag_end(90.0, 140.0).unwrap();
//! assert_eq!(snapshot.phase, GesturePhase::Settling);
//! assert_eq!(snapshot.settle_target, Some(300.0));
//! assert!(row.sink().iter().any(|e| e.deleted_row() == Some(&"t3_abc")));
//! ```

use std::fmt;
use std::time::Instant;

use super::decision::SettleDecision;
use super::events::{SwipeEvent, SwipeEventSink};
use super::phase::{GestureOperation, GesturePhase};
use super::session::{GestureSession, GestureSnapshot};
use crate::config::SwipeConfig;
use crate::error::{GestureError, GestureResult};

/// Drives one row's [`GestureSession`] from host gesture callbacks.
#[derive(Debug)]
pub struct SwipeDismissController<Id, S> {
    row_id: Id,
    config: SwipeConfig,
    session: GestureSession,
    sink: S,
}

impl<Id, S> SwipeDismissController<Id, S>
where
    Id: Clone + fmt::Debug,
    S: SwipeEventSink<Id>,
{
    /// Create a controller with default thresholds.
    pub fn new(row_id: Id, sink: S) -> Self {
        Self::with_config(row_id, SwipeConfig::default(), sink)
    }

    pub fn with_config(row_id: Id, config: SwipeConfig, sink: S) -> Self {
        Self {
            row_id,
            config,
            session: GestureSession::new(),
            sink,
        }
    }

    pub fn row_id(&self) -> &Id {
        &self.row_id
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn phase(&self) -> GesturePhase {
        self.session.phase
    }

    pub fn snapshot(&self) -> GestureSnapshot {
        self.session.snapshot()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Long press recognized: lift the row so it can be dragged.
    pub fn arm(&mut self) -> GestureResult<GestureSnapshot> {
        self.arm_at(Instant::now())
    }

    /// [`arm`](Self::arm) with an explicit press timestamp.
    pub fn arm_at(&mut self, now: Instant) -> GestureResult<GestureSnapshot> {
        self.ensure(GestureOperation::Arm)?;

        self.session.phase = GesturePhase::Armed;
        self.session.started_at = Some(now);
        tracing::debug!(row_id = ?self.row_id, "Swipe armed");
        self.sink.emit(SwipeEvent::BecameDraggable);

        Ok(self.snapshot())
    }

    /// New drag sample. `delta_y` is the translation since the drag started,
    /// not an increment.
    pub fn drag_sample(
        &mut self,
        delta_y: f64,
        predicted_end_delta_y: f64,
    ) -> GestureResult<GestureSnapshot> {
        self.ensure(GestureOperation::DragSample)?;

        let threshold = self.config.commit_threshold;
        self.session.vertical_offset = delta_y;
        self.session.predicted_end_offset = predicted_end_delta_y;

        // Symmetric threshold: a sample exactly on it leaves the flag alone.
        if delta_y.abs() > threshold && !self.session.committed {
            self.session.committed = true;
            tracing::debug!(row_id = ?self.row_id, delta_y, "Swipe crossed commit threshold");
            self.sink.emit(SwipeEvent::CommitArmed);
        } else if delta_y.abs() < threshold && self.session.committed {
            self.session.committed = false;
            tracing::debug!(row_id = ?self.row_id, delta_y, "Swipe back inside commit threshold");
            self.sink.emit(SwipeEvent::CommitDisarmed);
        }

        self.session.phase = if self.session.committed {
            GesturePhase::Committing
        } else {
            GesturePhase::Dragging
        };
        tracing::trace!(
            row_id = ?self.row_id,
            delta_y,
            predicted_end_delta_y,
            phase = %self.session.phase,
            "Swipe sample"
        );

        Ok(self.snapshot())
    }

    /// Pointer released.
    pub fn drag_end(
        &mut self,
        final_delta_y: f64,
        predicted_end_delta_y: f64,
    ) -> GestureResult<GestureSnapshot> {
        self.drag_end_at(final_delta_y, predicted_end_delta_y, Instant::now())
    }

    /// [`drag_end`](Self::drag_end) with an explicit release timestamp, used
    /// as the start of the settle.
    pub fn drag_end_at(
        &mut self,
        final_delta_y: f64,
        predicted_end_delta_y: f64,
        now: Instant,
    ) -> GestureResult<GestureSnapshot> {
        self.ensure(GestureOperation::DragEnd)?;

        // Released before the first drag sample: nothing moved, nothing to settle.
        if self.session.phase == GesturePhase::Armed {
            tracing::debug!(row_id = ?self.row_id, "Swipe released without dragging");
            self.session.reset();
            self.sink.emit(SwipeEvent::Cancelled {
                row_id: self.row_id.clone(),
            });
            return Ok(self.snapshot());
        }

        let decision =
            SettleDecision::resolve(final_delta_y, predicted_end_delta_y, &self.config);
        let target = decision.target_offset(&self.config);

        self.session.phase = GesturePhase::Settling;
        self.session.committed = false;
        self.session.vertical_offset = target;
        self.session.predicted_end_offset = predicted_end_delta_y;
        self.session.settle_target = Some(target);
        self.session.settle_started_at = Some(now);

        match decision {
            SettleDecision::Dismiss(direction) => {
                tracing::info!(
                    row_id = ?self.row_id,
                    ?direction,
                    final_delta_y,
                    predicted_end_delta_y,
                    "Swipe committed delete"
                );
                self.sink.emit(SwipeEvent::DeleteCommitted {
                    row_id: self.row_id.clone(),
                    direction,
                });
            }
            SettleDecision::Cancel => {
                tracing::debug!(
                    row_id = ?self.row_id,
                    final_delta_y,
                    predicted_end_delta_y,
                    "Swipe released without commit"
                );
                self.sink.emit(SwipeEvent::Cancelled {
                    row_id: self.row_id.clone(),
                });
            }
        }

        Ok(self.snapshot())
    }

    /// Force-end the session, e.g. when the row's view is torn down.
    ///
    /// A held row returns to Idle and reports `Cancelled`; a delete is never
    /// committed. A settling row already reported its outcome, so it just
    /// finishes settling.
    pub fn cancel(&mut self) -> GestureResult<GestureSnapshot> {
        self.ensure(GestureOperation::Cancel)?;

        let was = self.session.phase;
        self.session.reset();
        if was.is_held() {
            tracing::debug!(row_id = ?self.row_id, phase = %was, "Swipe cancelled");
            self.sink.emit(SwipeEvent::Cancelled {
                row_id: self.row_id.clone(),
            });
        } else {
            tracing::debug!(row_id = ?self.row_id, "Swipe settle cut short");
        }

        Ok(self.snapshot())
    }

    /// Host reports the settle animation finished.
    pub fn finish_settle(&mut self) -> GestureResult<GestureSnapshot> {
        self.ensure(GestureOperation::FinishSettle)?;

        self.session.reset();
        tracing::debug!(row_id = ?self.row_id, "Swipe settled");
        Ok(self.snapshot())
    }

    /// Complete a settle once the configured duration has elapsed since
    /// release. Returns true if the session went back to Idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.session.phase != GesturePhase::Settling {
            return false;
        }
        let elapsed = self
            .session
            .settle_started_at
            .map(|started| now.saturating_duration_since(started));
        match elapsed {
            Some(elapsed) if elapsed < self.config.settle_duration() => false,
            _ => {
                self.session.reset();
                tracing::debug!(row_id = ?self.row_id, "Swipe settled after fixed duration");
                true
            }
        }
    }

    fn ensure(&self, operation: GestureOperation) -> GestureResult<()> {
        let phase = self.session.phase;
        if phase.permits(operation) {
            Ok(())
        } else {
            tracing::warn!(
                row_id = ?self.row_id,
                %operation,
                %phase,
                "Swipe input rejected"
            );
            Err(GestureError::invalid_state(operation, phase))
        }
    }
}
