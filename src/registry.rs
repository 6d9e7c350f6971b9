//! Swipe sessions for a whole list of rows.
//!
//! Each row with a live session owns its own [`SwipeDismissController`];
//! rows share nothing. The registry routes host input by row id, forwards
//! every event to one host sink in emission order, and drops a controller as
//! soon as its session is back to Idle.
//!
//! Calls that touch several rows at once (`tick`, `retain_rows`) visit them
//! in the order they were armed.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::Instant;

use crate::config::SwipeConfig;
use crate::error::{GestureError, GestureResult};
use crate::gesture::{
    GestureOperation, GesturePhase, GestureSnapshot, SwipeDismissController, SwipeEvent,
    SwipeEventSink,
};

type RowController<Id> = SwipeDismissController<Id, Vec<SwipeEvent<Id>>>;

/// Live swipe sessions keyed by row id.
#[derive(Debug)]
pub struct SwipeRegistry<Id, S> {
    config: SwipeConfig,
    /// Rows with a live session
    rows: HashMap<Id, RowController<Id>>,
    /// Keys of `rows` in arm order
    order: Vec<Id>,
    sink: S,
}

impl<Id, S> SwipeRegistry<Id, S>
where
    Id: Clone + Eq + Hash + fmt::Debug,
    S: SwipeEventSink<Id>,
{
    pub fn new(config: SwipeConfig, sink: S) -> Self {
        Self {
            config,
            rows: HashMap::new(),
            order: Vec::new(),
            sink,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
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

    /// Number of rows with a live session.
    pub fn live_rows(&self) -> usize {
        self.rows.len()
    }

    /// Snapshot for `row_id`, idle if it has no session.
    pub fn snapshot(&self, row_id: &Id) -> GestureSnapshot {
        self.rows
            .get(row_id)
            .map(|row| row.snapshot())
            .unwrap_or_else(GestureSnapshot::idle)
    }

    pub fn phase(&self, row_id: &Id) -> GesturePhase {
        self.snapshot(row_id).phase
    }

    /// Start a session on `row_id`.
    pub fn arm(&mut self, row_id: Id) -> GestureResult<GestureSnapshot> {
        self.arm_at(row_id, Instant::now())
    }

    pub fn arm_at(&mut self, row_id: Id, now: Instant) -> GestureResult<GestureSnapshot> {
        if !self.rows.contains_key(&row_id) {
            self.order.push(row_id.clone());
        }
        let config = &self.config;
        let row = self.rows.entry(row_id.clone()).or_insert_with(|| {
            SwipeDismissController::with_config(row_id.clone(), config.clone(), Vec::new())
        });
        let result = row.arm_at(now);
        self.flush(&row_id);
        result
    }

    pub fn drag_sample(
        &mut self,
        row_id: &Id,
        delta_y: f64,
        predicted_end_delta_y: f64,
    ) -> GestureResult<GestureSnapshot> {
        self.route(row_id, GestureOperation::DragSample, |row| {
            row.drag_sample(delta_y, predicted_end_delta_y)
        })
    }

    pub fn drag_end(
        &mut self,
        row_id: &Id,
        final_delta_y: f64,
        predicted_end_delta_y: f64,
    ) -> GestureResult<GestureSnapshot> {
        self.drag_end_at(row_id, final_delta_y, predicted_end_delta_y, Instant::now())
    }

    pub fn drag_end_at(
        &mut self,
        row_id: &Id,
        final_delta_y: f64,
        predicted_end_delta_y: f64,
        now: Instant,
    ) -> GestureResult<GestureSnapshot> {
        self.route(row_id, GestureOperation::DragEnd, |row| {
            row.drag_end_at(final_delta_y, predicted_end_delta_y, now)
        })
    }

    pub fn cancel(&mut self, row_id: &Id) -> GestureResult<GestureSnapshot> {
        self.route(row_id, GestureOperation::Cancel, |row| row.cancel())
    }

    pub fn finish_settle(&mut self, row_id: &Id) -> GestureResult<GestureSnapshot> {
        self.route(row_id, GestureOperation::FinishSettle, |row| {
            row.finish_settle()
        })
    }

    /// Complete every settle whose duration has elapsed. Returns the rows
    /// that went back to Idle, in arm order.
    pub fn tick(&mut self, now: Instant) -> Vec<Id> {
        let rows = &mut self.rows;
        let settled: Vec<Id> = self
            .order
            .iter()
            .filter(|id| rows.get_mut(*id).is_some_and(|row| row.tick(now)))
            .cloned()
            .collect();
        for id in &settled {
            self.forget(id);
        }
        settled
    }

    /// Drop sessions for rows the host no longer shows. Held rows are
    /// cancelled first, so their `Cancelled` event still reaches the sink.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Id) -> bool,
    {
        let removed: Vec<Id> = self.order.iter().filter(|id| !keep(*id)).cloned().collect();
        for id in removed {
            if let Some(mut row) = self.forget(&id) {
                tracing::debug!(row_id = ?id, phase = %row.phase(), "Dropping swipe session");
                if let Err(err) = row.cancel() {
                    tracing::warn!(row_id = ?id, error = %err, "Dropped swipe session without cancelling");
                }
                for event in row.sink_mut().drain(..) {
                    self.sink.emit(event);
                }
            }
        }
    }

    fn route<F>(
        &mut self,
        row_id: &Id,
        operation: GestureOperation,
        input: F,
    ) -> GestureResult<GestureSnapshot>
    where
        F: FnOnce(&mut RowController<Id>) -> GestureResult<GestureSnapshot>,
    {
        let Some(row) = self.rows.get_mut(row_id) else {
            tracing::warn!(row_id = ?row_id, %operation, "Swipe input for row without a session");
            return Err(GestureError::invalid_state(operation, GesturePhase::Idle));
        };
        let result = input(row);
        self.flush(row_id);
        result
    }

    /// Forward buffered events and forget the row once it is idle again.
    fn flush(&mut self, row_id: &Id) {
        let idle = match self.rows.get_mut(row_id) {
            Some(row) => {
                for event in row.sink_mut().drain(..) {
                    self.sink.emit(event);
                }
                !row.phase().is_live()
            }
            None => false,
        };
        if idle {
            self.forget(row_id);
        }
    }

    fn forget(&mut self, row_id: &Id) -> Option<RowController<Id>> {
        self.order.retain(|id| id != row_id);
        self.rows.remove(row_id)
    }
}
