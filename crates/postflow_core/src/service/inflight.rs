//! Transient in-flight markers for outstanding provider calls.
//!
//! # Responsibility
//! - Track which post currently has a pending call per action kind.
//! - Give UIs the signal they need to disable the triggering control.
//!
//! # Invariants
//! - One shared slot per action kind: at most one post id is marked pending
//!   for a given kind at a time, system-wide. A second `begin` for the same
//!   kind overwrites the slot; the core does not prevent concurrent calls.
//! - Slots are advisory. Callers must clear them on every exit path.

use crate::model::post::PostId;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Per-post provider action kinds tracked by the in-flight slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActionKind {
    Regenerate,
    Caption,
    RefineCaption,
    Shorten,
    Visual,
    Variations,
    Prediction,
}

impl ActionKind {
    /// Human-readable banner message shown when this action fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Regenerate => "Failed to regenerate post. Please try again.",
            Self::Caption => "Failed to generate caption.",
            Self::RefineCaption => "Failed to refine caption.",
            Self::Shorten => "Failed to shorten post content.",
            Self::Visual => "Failed to generate visual suggestion.",
            Self::Variations => "Failed to generate post variations.",
            Self::Prediction => "Failed to predict engagement.",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Regenerate => "regenerate",
            Self::Caption => "caption",
            Self::RefineCaption => "refine_caption",
            Self::Shorten => "shorten",
            Self::Visual => "visual_suggestion",
            Self::Variations => "variations",
            Self::Prediction => "prediction",
        };
        write!(f, "{name}")
    }
}

/// Single-slot-per-kind pending markers.
#[derive(Debug, Default)]
pub struct InFlightTracker {
    slots: BTreeMap<ActionKind, PostId>,
}

impl InFlightTracker {
    /// Marks a call as pending, overwriting any previous slot for the kind.
    pub fn begin(&mut self, kind: ActionKind, post_id: PostId) {
        self.slots.insert(kind, post_id);
    }

    /// Clears the slot for the kind.
    pub fn finish(&mut self, kind: ActionKind) {
        self.slots.remove(&kind);
    }

    /// Returns the post currently pending for the kind, if any.
    pub fn pending(&self, kind: ActionKind) -> Option<PostId> {
        self.slots.get(&kind).copied()
    }

    /// Returns whether the given post has a pending call of the given kind.
    pub fn is_pending(&self, kind: ActionKind, post_id: PostId) -> bool {
        self.pending(kind) == Some(post_id)
    }

    pub fn is_idle(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionKind, InFlightTracker};
    use uuid::Uuid;

    #[test]
    fn begin_overwrites_the_shared_slot() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut tracker = InFlightTracker::default();

        tracker.begin(ActionKind::Caption, first);
        tracker.begin(ActionKind::Caption, second);

        assert!(!tracker.is_pending(ActionKind::Caption, first));
        assert!(tracker.is_pending(ActionKind::Caption, second));
    }

    #[test]
    fn kinds_are_tracked_independently() {
        let post = Uuid::new_v4();
        let mut tracker = InFlightTracker::default();

        tracker.begin(ActionKind::Regenerate, post);
        assert!(tracker.pending(ActionKind::Shorten).is_none());

        tracker.finish(ActionKind::Regenerate);
        assert!(tracker.is_idle());
    }
}
