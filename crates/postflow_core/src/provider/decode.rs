//! Decode-or-default recovery for structured provider responses.
//!
//! # Responsibility
//! - Extract the JSON body from a response, with or without a markdown
//!   fence around it.
//! - Substitute the caller-provided fallback when parsing fails, so a
//!   malformed response degrades the result instead of aborting the action.
//!
//! # Invariants
//! - This function never returns an error; failures are logged and the
//!   fallback is returned.

use log::warn;
use serde::de::DeserializeOwned;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Decodes `raw` into `T`, returning `fallback` on any parse failure.
///
/// Responses wrapped in a ```` ```json ```` fence are unwrapped first;
/// otherwise the whole string is treated as JSON.
pub fn decode_or_default<T: DeserializeOwned>(raw: &str, fallback: T) -> T {
    match serde_json::from_str(extract_json_body(raw).trim()) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=decode_fallback module=provider status=fallback error={err}");
            fallback
        }
    }
}

/// Returns the fenced body when a well-formed ```` ```json ```` block
/// exists, or the full input otherwise.
fn extract_json_body(raw: &str) -> &str {
    let Some(open) = raw.find(FENCE_OPEN) else {
        return raw;
    };
    let body_start = open + FENCE_OPEN.len();
    match raw.rfind(FENCE_CLOSE) {
        Some(close) if close > body_start => &raw[body_start..close],
        _ => raw,
    }
}
