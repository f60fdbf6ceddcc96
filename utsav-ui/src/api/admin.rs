//! Admin HTTP request handlers
//!
//! Login/logout plus the write proxies to the backend. Every write is an
//! independent round trip; one failed upload or save never corrupts fields
//! saved by earlier requests. Incoming record data is normalized before it
//! is forwarded, so the backend only ever stores fully defaulted records.

use crate::api::auth::ADMIN_TOKEN_HEADER;
use crate::api::{backend_error, error_response, ApiError};
use crate::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use utsav_common::api::client::UploadFile;
use utsav_common::normalize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: Uuid,
    pub expires_in_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

fn ok(status: &str) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: status.to_string(),
    })
}

/// POST /api/admin/login - Exchange credentials for a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if !state.config.admin_enabled() {
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "Admin login is disabled (no admin password configured)",
        ));
    }

    if request.username != state.config.admin_username
        || request.password != state.config.admin_password
    {
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Incorrect username or password",
        ));
    }

    let token = state.sessions.issue().await;
    info!("Admin session issued for {}", request.username);
    Ok(Json(LoginResponse {
        token,
        expires_in_seconds: state.sessions.ttl().as_secs(),
    }))
}

/// POST /api/admin/logout - Revoke the presented session token
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<StatusResponse> {
    if let Some(token) = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
    {
        state.sessions.revoke(token).await;
    }
    ok("logged out")
}

#[derive(Debug, Deserialize)]
pub struct CreateYearRequest {
    pub year: i32,
}

/// POST /api/admin/years - Create a year with an empty record
pub async fn create_year(
    State(state): State<AppState>,
    Json(request): Json<CreateYearRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    state
        .backend
        .create_year(request.year)
        .await
        .map_err(backend_error)?;
    info!("Created year {}", request.year);
    Ok((StatusCode::CREATED, ok("created")))
}

#[derive(Debug, Deserialize)]
pub struct UpdateYearRequest {
    /// Raw record data; normalized before forwarding
    pub data: Value,
}

/// PUT /api/admin/years/:year - Replace a year's record
pub async fn update_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Json(request): Json<UpdateYearRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let record = normalize(&request.data);
    state
        .backend
        .update_year(year, &record)
        .await
        .map_err(backend_error)?;
    info!("Saved record for year {}", year);
    Ok(ok("saved"))
}

/// POST /api/admin/years/:year/delete - Delete a year and all its data
pub async fn delete_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.backend.delete_year(year).await.map_err(backend_error)?;
    info!("Deleted year {}", year);
    Ok(ok("deleted"))
}

#[derive(Debug, Serialize)]
pub struct UploadUrlsResponse {
    pub urls: Vec<String>,
}

/// POST /api/admin/upload - Forward a multipart upload to the backend
///
/// Accepts one or more `file` fields and returns the stored URLs in the
/// order the backend reports them.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadUrlsResponse>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Malformed multipart body: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.bin").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(|e| {
            error_response(StatusCode::BAD_REQUEST, format!("Failed to read upload: {}", e))
        })?;
        files.push(UploadFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "No file fields in upload",
        ));
    }

    let count = files.len();
    let urls = state.backend.upload(files).await.map_err(backend_error)?;
    info!("Uploaded {} file(s)", count);
    Ok(Json(UploadUrlsResponse { urls }))
}

/// DELETE /api/admin/upload/:filename - Remove one stored file
pub async fn delete_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .backend
        .delete_upload(&filename)
        .await
        .map_err(backend_error)?;
    info!("Deleted upload {}", filename);
    Ok(ok("deleted"))
}
