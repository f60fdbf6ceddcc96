//! Admin session middleware
//!
//! Write routes require a valid session token in the `X-Admin-Token`
//! header. Tokens are issued by the login handler and validated against the
//! in-memory session store.

use crate::api::error_response;
use crate::AppState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

/// Header carrying the admin session token
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Reject requests without a live admin session
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok());

    match token {
        Some(token) if state.sessions.validate(token).await => next.run(request).await,
        _ => error_response(
            StatusCode::UNAUTHORIZED,
            "Missing or invalid admin token",
        )
        .into_response(),
    }
}
