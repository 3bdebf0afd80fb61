//! Calendar scheduling: date keys, day buckets and drag interactions.
//!
//! # Responsibility
//! - Maintain the date-to-posts map under schedule/unschedule/reschedule.
//! - Resolve drag payloads into scheduling actions.
//! - Provide pure month navigation for the calendar view.
//!
//! # Invariants
//! - Empty day buckets are deleted, never stored.
//! - A post appears under at most one date at a time when mutated through
//!   the drop resolvers.

pub mod date_key;
pub mod drag;
pub mod month;
pub mod schedule;
