//! Client-side error types for the user API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type for client-side use.
///
/// The feed screen treats every variant the same way: log it and apply
/// no state change, so a failed page fetch leaves the loading flag set.
/// The distinction still matters for logs and for future handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("deserialization error: {0}")]
    Deserialize(String),
}

/// Error envelope randomuser.me returns on failure: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Attempt to pull the service's own message out of a failure body.
pub fn try_api_error_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    if parsed.error.trim().is_empty() {
        return None;
    }
    Some(parsed.error)
}
