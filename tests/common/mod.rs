//! Common test utilities for integration tests.

use swipe_dismiss::{GestureSnapshot, SwipeDismissController, SwipeEvent};

pub type RecordingRow = SwipeDismissController<String, Vec<SwipeEvent<String>>>;

/// Controller for a feed row recording every event it emits.
pub fn recording_row(id: &str) -> RecordingRow {
    SwipeDismissController::new(id.to_string(), Vec::new())
}

/// Arm, feed `samples` as (delta_y, predicted_end_delta_y), then release with
/// the last sample. Returns the snapshot after release.
pub fn swipe(row: &mut RecordingRow, samples: &[(f64, f64)]) -> GestureSnapshot {
    row.arm().expect("arm from idle");
    for (delta_y, predicted) in samples {
        row.drag_sample(*delta_y, *predicted).expect("sample while held");
    }
    let (final_delta_y, predicted) = samples.last().copied().unwrap_or((0.0, 0.0));
    row.drag_end(final_delta_y, predicted).expect("release while held")
}

/// Number of delete callbacks a row has fired.
pub fn delete_count(row: &RecordingRow) -> usize {
    row.sink().iter().filter(|e| e.deleted_row().is_some()).count()
}
