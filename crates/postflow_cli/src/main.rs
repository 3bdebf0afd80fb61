//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `postflow_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("postflow_core ping={}", postflow_core::ping());
    println!("postflow_core version={}", postflow_core::core_version());
}
