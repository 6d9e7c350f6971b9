//! Scripted playback of swipe input.
//!
//! A replay script lists the rows a host would show and a sequence of
//! recognizer callbacks addressed to them. Playing it drives a
//! [`SwipeRegistry`] exactly as a host would, including removing a row from
//! the list when its delete is committed, and records what the host would
//! observe after every step.
//!
//! ```json
//! {
//!   "rows": ["t3_a", "t3_b"],
//!   "steps": [
//!     {"op": "arm", "row": "t3_a"},
//!     {"op": "drag", "row": "t3_a", "delta_y": 85, "predicted_end_delta_y": 120},
//!     {"op": "end", "row": "t3_a", "final_delta_y": 90, "predicted_end_delta_y": 140},
//!     {"op": "wait", "ms": 400}
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::SwipeConfig;
use crate::error::{GestureError, ReplayError};
use crate::gesture::{GestureSnapshot, SwipeEvent};
use crate::registry::SwipeRegistry;

/// One host input in a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    Arm {
        row: String,
    },
    Drag {
        row: String,
        delta_y: f64,
        predicted_end_delta_y: f64,
    },
    End {
        row: String,
        final_delta_y: f64,
        predicted_end_delta_y: f64,
    },
    Cancel {
        row: String,
    },
    FinishSettle {
        row: String,
    },
    /// Advance the replay clock; settles that run out complete.
    Wait {
        ms: u64,
    },
}

impl ReplayStep {
    pub fn op(&self) -> &'static str {
        match self {
            ReplayStep::Arm { .. } => "arm",
            ReplayStep::Drag { .. } => "drag",
            ReplayStep::End { .. } => "end",
            ReplayStep::Cancel { .. } => "cancel",
            ReplayStep::FinishSettle { .. } => "finish_settle",
            ReplayStep::Wait { .. } => "wait",
        }
    }

    pub fn row(&self) -> Option<&str> {
        match self {
            ReplayStep::Arm { row }
            | ReplayStep::Drag { row, .. }
            | ReplayStep::End { row, .. }
            | ReplayStep::Cancel { row }
            | ReplayStep::FinishSettle { row } => Some(row),
            ReplayStep::Wait { .. } => None,
        }
    }
}

/// Rows on screen plus the input to play over them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub rows: Vec<String>,
    pub steps: Vec<ReplayStep>,
}

/// What the host observed after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<GestureSnapshot>,
    pub events: Vec<SwipeEvent<String>>,
    /// Rows whose settle completed during a `wait`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub settled: Vec<String>,
}

/// Outcome of a full replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub records: Vec<StepRecord>,
    /// Host row list after committed deletes were applied.
    pub remaining_rows: Vec<String>,
    pub deleted_rows: Vec<String>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let json = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Play every step, stopping at the first rejected input.
    pub fn run(&self, config: &SwipeConfig) -> Result<ReplayReport, ReplayError> {
        let mut registry: SwipeRegistry<String, Vec<SwipeEvent<String>>> =
            SwipeRegistry::new(config.clone(), Vec::new());
        let mut rows = self.rows.clone();
        let mut deleted_rows = Vec::new();
        let mut records = Vec::with_capacity(self.steps.len());
        let mut clock = Instant::now();

        for (index, step) in self.steps.iter().enumerate() {
            let step_failed = |source: GestureError| ReplayError::Step {
                step: index,
                row: step.row().unwrap_or_default().to_string(),
                source,
            };

            if let ReplayStep::Arm { row } = step {
                if !rows.contains(row) {
                    return Err(ReplayError::UnknownRow {
                        step: index,
                        row: row.clone(),
                    });
                }
            }

            let mut settled = Vec::new();
            let snapshot = match step {
                ReplayStep::Arm { row } => Some(registry.arm_at(row.clone(), clock)),
                ReplayStep::Drag {
                    row,
                    delta_y,
                    predicted_end_delta_y,
                } => Some(registry.drag_sample(row, *delta_y, *predicted_end_delta_y)),
                ReplayStep::End {
                    row,
                    final_delta_y,
                    predicted_end_delta_y,
                } => Some(registry.drag_end_at(
                    row,
                    *final_delta_y,
                    *predicted_end_delta_y,
                    clock,
                )),
                ReplayStep::Cancel { row } => Some(registry.cancel(row)),
                ReplayStep::FinishSettle { row } => Some(registry.finish_settle(row)),
                ReplayStep::Wait { ms } => {
                    clock += Duration::from_millis(*ms);
                    settled = registry.tick(clock);
                    None
                }
            }
            .transpose()
            .map_err(step_failed)?;

            let events: Vec<SwipeEvent<String>> = registry.sink_mut().drain(..).collect();
            for event in &events {
                if let Some(row) = event.deleted_row() {
                    rows.retain(|r| r != row);
                    deleted_rows.push(row.clone());
                }
            }

            tracing::debug!(step = index, op = step.op(), events = events.len(), "Replayed step");
            records.push(StepRecord {
                step: index,
                op: step.op(),
                row: step.row().map(str::to_string),
                snapshot,
                events,
                settled,
            });
        }

        Ok(ReplayReport {
            records,
            remaining_rows: rows,
            deleted_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{DismissDirection, GesturePhase};

    fn script(json: &str) -> ReplayScript {
        ReplayScript::from_json(json).unwrap()
    }

    #[test]
    fn test_parse_steps() {
        let script = script(
            r#"{"rows": ["a"], "steps": [
                {"op": "arm", "row": "a"},
                {"op": "drag", "row": "a", "delta_y": 12.5, "predicted_end_delta_y": 20},
                {"op": "wait", "ms": 100}
            ]}"#,
        );
        assert_eq!(script.rows, vec!["a".to_string()]);
        assert_eq!(
            script.steps[1],
            ReplayStep::Drag {
                row: "a".to_string(),
                delta_y: 12.5,
                predicted_end_delta_y: 20.0,
            }
        );
        assert_eq!(script.steps[2].row(), None);
        assert_eq!(script.steps[2].op(), "wait");
    }

    #[test]
    fn test_parse_rejects_unknown_op() {
        let err = ReplayScript::from_json(r#"{"steps": [{"op": "fling", "row": "a"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ReplayError::Parse(_)));
    }

    #[test]
    fn test_committed_row_is_removed() {
        let report = script(
            r#"{"rows": ["a", "b"], "steps": [
                {"op": "arm", "row": "a"},
                {"op": "drag", "row": "a", "delta_y": 90, "predicted_end_delta_y": 100},
                {"op": "end", "row": "a", "final_delta_y": 90, "predicted_end_delta_y": 100},
                {"op": "finish_settle", "row": "a"}
            ]}"#,
        )
        .run(&SwipeConfig::default())
        .unwrap();

        assert_eq!(report.remaining_rows, vec!["b".to_string()]);
        assert_eq!(report.deleted_rows, vec!["a".to_string()]);
        assert_eq!(report.records.len(), 4);
        assert_eq!(
            report.records[2].events,
            vec![SwipeEvent::DeleteCommitted {
                row_id: "a".to_string(),
                direction: DismissDirection::Down,
            }]
        );
        assert_eq!(report.records[3].snapshot, Some(GestureSnapshot::idle()));
    }

    #[test]
    fn test_wait_completes_settles() {
        let report = script(
            r#"{"rows": ["a"], "steps": [
                {"op": "arm", "row": "a"},
                {"op": "drag", "row": "a", "delta_y": 5, "predicted_end_delta_y": 5},
                {"op": "end", "row": "a", "final_delta_y": 5, "predicted_end_delta_y": 5},
                {"op": "wait", "ms": 100},
                {"op": "wait", "ms": 300}
            ]}"#,
        )
        .run(&SwipeConfig::default())
        .unwrap();

        assert!(report.records[3].settled.is_empty());
        assert_eq!(report.records[4].settled, vec!["a".to_string()]);
        assert_eq!(report.remaining_rows, vec!["a".to_string()]);
        assert_eq!(
            report.records[2].snapshot.map(|s| s.phase),
            Some(GesturePhase::Settling)
        );
    }

    #[test]
    fn test_out_of_order_step_reports_index() {
        let err = script(
            r#"{"rows": ["a"], "steps": [
                {"op": "arm", "row": "a"},
                {"op": "cancel", "row": "a"},
                {"op": "drag", "row": "a", "delta_y": 5, "predicted_end_delta_y": 5}
            ]}"#,
        )
        .run(&SwipeConfig::default())
        .unwrap_err();

        assert_eq!(err.step(), Some(2));
        match err {
            ReplayError::Step { row, source, .. } => {
                assert_eq!(row, "a");
                assert_eq!(source.phase(), GesturePhase::Idle);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_arming_row_not_on_screen_fails() {
        let err = script(r#"{"rows": [], "steps": [{"op": "arm", "row": "ghost"}]}"#)
            .run(&SwipeConfig::default())
            .unwrap_err();
        assert!(matches!(err, ReplayError::UnknownRow { step: 0, .. }));
    }

    #[test]
    fn test_record_json_omits_empty_fields() {
        let report = script(r#"{"rows": ["a"], "steps": [{"op": "wait", "ms": 1}]}"#)
            .run(&SwipeConfig::default())
            .unwrap();
        let json = serde_json::to_value(&report.records[0]).unwrap();
        assert_eq!(json["op"], "wait");
        assert!(json.get("row").is_none());
        assert!(json.get("snapshot").is_none());
        assert!(json.get("settled").is_none());
    }
}
