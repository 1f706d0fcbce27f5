//! HTTP handlers for the server.

pub mod render;
pub mod reports;

use axum::{body::Bytes, http::StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::DocsError;

/// Map a render error to a response: caller mistakes are 400, the rest 500.
pub(crate) fn error_response(err: DocsError) -> (StatusCode, String) {
    let status = if err.is_caller_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    warn!(status = status.as_u16(), error = %err, "request failed");
    (status, err.to_string())
}

/// Parse a JSON request body. Malformed bodies and unknown tag colors are
/// caller errors like any other, so they go through [`error_response`].
pub(crate) fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, (StatusCode, String)> {
    serde_json::from_slice(body)
        .map_err(DocsError::from)
        .map_err(error_response)
}

/// Handle GET /health.
pub async fn health() -> &'static str {
    "ok"
}
