//! Domain model for campaign content planning.
//!
//! # Responsibility
//! - Define the canonical project/post shapes shared by all core layers.
//! - Keep wire naming compatible with previously persisted snapshots.
//!
//! # Invariants
//! - Every project and post is identified by a stable id that never changes.
//! - Posts are never deleted individually; they persist until their project
//!   is discarded.

pub mod campaign;
pub mod post;
pub mod project;
