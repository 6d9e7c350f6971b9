//! Swipe-to-dismiss gesture handling for list rows
//!
//! A row is dismissed by pressing and holding it, dragging it vertically, and
//! releasing. This module turns that interaction into a state machine that
//! knows nothing about the UI toolkit driving it:
//!
//! - `phase`: the session lifecycle and which inputs each phase accepts
//! - `session`: per-row session state and the snapshot handed to renderers
//! - `decision`: the release rule choosing dismiss-up, dismiss-down or cancel
//! - `events`: events and haptic cues the host reacts to
//! - `controller`: the per-row state machine tying them together
//!
//! # Lifecycle
//!
//! ```text
//! Idle --arm--> Armed --sample--> Dragging <--sample--> Committing
//!                 |                   \                   /
//!                 |                    `----drag_end-----'
//!                 |                            |
//!          drag_end/cancel                 Settling --finish_settle/tick--> Idle
//!                 v
//!               Idle
//! ```
//!
//! `cancel` is accepted in every live phase and always lands in Idle.
//!
//! # Usage
//!
//! ```ignore
//! use swipe_dismiss::gesture::{SwipeDismissController, SwipeEvent};
//!
//! let mut row = SwipeDismissController::new(post_id, Vec::new());
//!
//! // Long press recognized
//! row.arm()?;
//!
//! // Every drag update
//! let snapshot = row.drag_sample(translation, predicted_end)?;
//! render(snapshot.vertical_offset, snapshot.committed);
//!
//! // Release
//! row.drag_end(translation, predicted_end)?;
//! for event in row.sink_mut().drain(..) {
//!     if let Some(id) = event.deleted_row() {
//!         posts.retain(|p| p.id != *id);
//!     }
//! }
//! ```

pub mod controller;
pub mod decision;
pub mod events;
pub mod phase;
pub mod session;

pub use controller::SwipeDismissController;
pub use decision::{DismissDirection, SettleDecision};
pub use events::{HapticCue, NoopSink, SwipeEvent, SwipeEventSink};
pub use phase::{GestureOperation, GesturePhase};
pub use session::{GestureSession, GestureSnapshot};
