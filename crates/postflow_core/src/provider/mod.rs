//! Generative provider boundary.
//!
//! # Responsibility
//! - Define the opaque-service contract every AI-backed operation goes
//!   through.
//! - Recover from malformed structured responses with documented fallback
//!   shapes instead of failing the action.

pub mod decode;
pub mod spi;
