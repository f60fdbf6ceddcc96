//! HTTP API: read-side handlers, admin handlers, and auth middleware

pub mod admin;
pub mod auth;
pub mod handlers;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Error payload for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Standard rejection tuple used by all handlers
pub type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// Map a backend round-trip failure to a 502
pub(crate) fn backend_error(err: utsav_common::Error) -> ApiError {
    error_response(StatusCode::BAD_GATEWAY, err.to_string())
}
