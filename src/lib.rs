//! swipe-dismiss - Swipe-to-delete gesture handling for list rows
//!
//! A row is pressed and held, dragged vertically, and released. The crate
//! turns that interaction into snapshots to render, haptic cues to play,
//! and a single delete decision per session, without depending on any UI
//! toolkit.
//!
//! - [`gesture`]: the per-row state machine
//! - [`registry`]: sessions for a whole list, keyed by row id
//! - [`config`]: thresholds and their config file
//! - [`replay`]: scripted playback used by the `swipe-replay` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod registry;
pub mod replay;

pub use config::SwipeConfig;
pub use error::{GestureError, GestureResult, SwipeError, SwipeResult};
pub use gesture::{
    DismissDirection, GesturePhase, GestureSnapshot, HapticCue, SwipeDismissController,
    SwipeEvent, SwipeEventSink,
};
pub use registry::SwipeRegistry;
