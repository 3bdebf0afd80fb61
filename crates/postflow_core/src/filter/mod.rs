//! Derived, read-only views over post collections.
//!
//! # Responsibility
//! - Filter posts by type/tone/feature without mutating the store.
//! - Derive the selectable tone options from the data itself.

pub mod post_filter;
