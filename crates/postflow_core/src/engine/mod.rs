//! Pure project mutation engine.
//!
//! # Responsibility
//! - Express every user action as a pure `Project -> Project` derivation.
//! - Apply a mutator to exactly the active project of a collection.
//!
//! # Invariants
//! - Mutators never touch non-target projects.
//! - A mutation referencing an unknown post id is a tagged no-op, not an
//!   error.

pub mod mutation;
