//! Events emitted by a swipe session and the sink hosts subscribe with.
//!
//! The controller never touches platform haptics or the host's row list.
//! It emits [`SwipeEvent`]s; the host maps cue events to feedback and removes
//! the row when it sees [`SwipeEvent::DeleteCommitted`].

use serde::{Deserialize, Serialize};

use super::decision::DismissDirection;

/// Haptic feedback strength requested by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticCue {
    /// Row became draggable, or crossed into the commit zone.
    Strong,
    /// Row left the commit zone.
    Light,
}

impl HapticCue {
    /// Intensity in `0.0..=1.0`.
    pub fn intensity(&self) -> f32 {
        match self {
            HapticCue::Strong => 1.0,
            HapticCue::Light => 0.5,
        }
    }

    /// Sharpness in `0.0..=1.0`.
    pub fn sharpness(&self) -> f32 {
        match self {
            HapticCue::Strong => 1.0,
            HapticCue::Light => 0.5,
        }
    }
}

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SwipeEvent<Id> {
    /// Long press accepted; the row now follows the pointer.
    BecameDraggable,
    /// Drag crossed the commit threshold outward.
    CommitArmed,
    /// Drag came back inside the commit threshold.
    CommitDisarmed,
    /// Release dismissed the row. Emitted at most once per session.
    DeleteCommitted {
        row_id: Id,
        direction: DismissDirection,
    },
    /// Session ended without a delete.
    Cancelled { row_id: Id },
}

impl<Id> SwipeEvent<Id> {
    /// Haptic cue the host should play for this event, if any.
    pub fn haptic_cue(&self) -> Option<HapticCue> {
        match self {
            SwipeEvent::BecameDraggable | SwipeEvent::CommitArmed => Some(HapticCue::Strong),
            SwipeEvent::CommitDisarmed => Some(HapticCue::Light),
            SwipeEvent::DeleteCommitted { .. } | SwipeEvent::Cancelled { .. } => None,
        }
    }

    /// True for the events that end a session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SwipeEvent::DeleteCommitted { .. } | SwipeEvent::Cancelled { .. }
        )
    }

    /// Row to remove from the host's list, if this event commits a delete.
    pub fn deleted_row(&self) -> Option<&Id> {
        match self {
            SwipeEvent::DeleteCommitted { row_id, .. } => Some(row_id),
            _ => None,
        }
    }
}

/// Receiver for session events.
pub trait SwipeEventSink<Id> {
    fn emit(&mut self, event: SwipeEvent<Id>);
}

impl<Id> SwipeEventSink<Id> for Vec<SwipeEvent<Id>> {
    fn emit(&mut self, event: SwipeEvent<Id>) {
        self.push(event);
    }
}

impl<Id, S: SwipeEventSink<Id> + ?Sized> SwipeEventSink<Id> for &mut S {
    fn emit(&mut self, event: SwipeEvent<Id>) {
        (**self).emit(event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl<Id> SwipeEventSink<Id> for NoopSink {
    fn emit(&mut self, _event: SwipeEvent<Id>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_mapping() {
        assert_eq!(
            SwipeEvent::<u32>::BecameDraggable.haptic_cue(),
            Some(HapticCue::Strong)
        );
        assert_eq!(SwipeEvent::<u32>::CommitArmed.haptic_cue(), Some(HapticCue::Strong));
        assert_eq!(SwipeEvent::<u32>::CommitDisarmed.haptic_cue(), Some(HapticCue::Light));
        assert_eq!(SwipeEvent::Cancelled { row_id: 1u32 }.haptic_cue(), None);
    }

    #[test]
    fn test_cue_strengths() {
        assert_eq!(HapticCue::Strong.intensity(), 1.0);
        assert_eq!(HapticCue::Strong.sharpness(), 1.0);
        assert_eq!(HapticCue::Light.intensity(), 0.5);
        assert_eq!(HapticCue::Light.sharpness(), 0.5);
    }

    #[test]
    fn test_terminal_events() {
        let delete = SwipeEvent::DeleteCommitted {
            row_id: "t3_abc",
            direction: DismissDirection::Down,
        };
        assert!(delete.is_terminal());
        assert_eq!(delete.deleted_row(), Some(&"t3_abc"));

        let cancelled = SwipeEvent::Cancelled { row_id: "t3_abc" };
        assert!(cancelled.is_terminal());
        assert_eq!(cancelled.deleted_row(), None);

        assert!(!SwipeEvent::<&str>::CommitArmed.is_terminal());
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<SwipeEvent<u8>> = Vec::new();
        sink.emit(SwipeEvent::BecameDraggable);
        sink.emit(SwipeEvent::Cancelled { row_id: 7 });
        assert_eq!(
            sink,
            vec![SwipeEvent::BecameDraggable, SwipeEvent::Cancelled { row_id: 7 }]
        );
    }

    #[test]
    fn test_event_json_shape() {
        let event = SwipeEvent::DeleteCommitted {
            row_id: "t3_abc".to_string(),
            direction: DismissDirection::Up,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "delete_committed");
        assert_eq!(json["row_id"], "t3_abc");
        assert_eq!(json["direction"], "up");
    }
}
