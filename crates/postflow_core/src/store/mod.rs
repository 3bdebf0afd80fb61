//! Persistence adapter for the project collection.
//!
//! # Responsibility
//! - Define the whole-collection snapshot contract.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The collection is serialized as one unit on every write; there is no
//!   partial or incremental persistence.

pub mod snapshot_store;
