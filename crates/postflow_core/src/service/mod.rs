//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate provider calls, pure mutations and snapshot persistence
//!   into user-action level APIs.
//! - Keep UI layers decoupled from provider and storage details.

pub mod campaign_service;
pub mod inflight;
