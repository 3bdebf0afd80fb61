//! Drag payload and drop-target resolution.
//!
//! # Responsibility
//! - Define the wire shape carried between drag source and drop target.
//! - Turn a payload plus drop location into exactly one scheduling action.
//!
//! # Invariants
//! - The encoded payload is `{"postId": ..., "originalDate": ...}` with
//!   `originalDate` explicitly `null` for pool-originated drags; both sides
//!   of the drag interaction depend on this exact shape.
//! - Dropping on the source day, or from the pool back onto the pool,
//!   resolves to no action at all.

use crate::calendar::date_key::DateKey;
use crate::model::post::PostId;
use serde::{Deserialize, Serialize};

/// Payload attached to a dragged post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub post_id: PostId,
    /// Day the drag started from, or `None` for the unscheduled pool.
    pub original_date: Option<DateKey>,
}

impl DragPayload {
    /// Encodes the payload for the drag data channel.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a payload received from the drag data channel.
    pub fn decode(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Scheduling action resolved from one drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// First-time placement of a pool post onto a day.
    Schedule { date: DateKey },
    /// Move between two distinct days.
    Reschedule { from: DateKey, to: DateKey },
    /// Return a scheduled post to the pool.
    Unschedule { date: DateKey },
    /// Drop resolves to nothing (same day, or pool-to-pool).
    Ignore,
}

/// Resolves a drop onto a day cell.
///
/// A payload carrying a source date reschedules unless source and target are
/// equal; a pool payload schedules.
pub fn resolve_day_drop(payload: &DragPayload, target: DateKey) -> DropAction {
    match payload.original_date {
        Some(from) if from == target => DropAction::Ignore,
        Some(from) => DropAction::Reschedule { from, to: target },
        None => DropAction::Schedule { date: target },
    }
}

/// Resolves a drop onto the unscheduled pool.
///
/// Only calendar-originated drags unschedule; pool-originated drags landing
/// back on the pool resolve to nothing.
pub fn resolve_pool_drop(payload: &DragPayload) -> DropAction {
    match payload.original_date {
        Some(date) => DropAction::Unschedule { date },
        None => DropAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_day_drop, resolve_pool_drop, DragPayload, DropAction};
    use crate::calendar::date_key::DateKey;
    use uuid::Uuid;

    fn day(text: &str) -> DateKey {
        text.parse().unwrap()
    }

    #[test]
    fn payload_wire_shape_is_stable() {
        let id = Uuid::new_v4();
        let payload = DragPayload {
            post_id: id,
            original_date: None,
        };
        let encoded = payload.encode().unwrap();
        assert_eq!(
            encoded,
            format!("{{\"postId\":\"{id}\",\"originalDate\":null}}")
        );
        assert_eq!(DragPayload::decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn day_drop_from_pool_schedules() {
        let payload = DragPayload {
            post_id: Uuid::new_v4(),
            original_date: None,
        };
        assert_eq!(
            resolve_day_drop(&payload, day("2025-06-01")),
            DropAction::Schedule {
                date: day("2025-06-01")
            }
        );
    }

    #[test]
    fn day_drop_from_another_day_reschedules() {
        let payload = DragPayload {
            post_id: Uuid::new_v4(),
            original_date: Some(day("2025-06-01")),
        };
        assert_eq!(
            resolve_day_drop(&payload, day("2025-06-02")),
            DropAction::Reschedule {
                from: day("2025-06-01"),
                to: day("2025-06-02")
            }
        );
    }

    #[test]
    fn day_drop_on_the_same_day_is_ignored() {
        let payload = DragPayload {
            post_id: Uuid::new_v4(),
            original_date: Some(day("2025-06-01")),
        };
        assert_eq!(resolve_day_drop(&payload, day("2025-06-01")), DropAction::Ignore);
    }

    #[test]
    fn pool_drop_requires_a_source_date() {
        let from_calendar = DragPayload {
            post_id: Uuid::new_v4(),
            original_date: Some(day("2025-06-03")),
        };
        assert_eq!(
            resolve_pool_drop(&from_calendar),
            DropAction::Unschedule {
                date: day("2025-06-03")
            }
        );

        let from_pool = DragPayload {
            post_id: Uuid::new_v4(),
            original_date: None,
        };
        assert_eq!(resolve_pool_drop(&from_pool), DropAction::Ignore);
    }
}
