//! Test harness for integration tests
//!
//! Spins up a mock festival backend and the utsav-ui service on ephemeral
//! ports so tests can drive the real HTTP surface with reqwest.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use utsav_common::config::Config;
use utsav_ui::{build_router, AppState};

/// Everything the mock backend was asked to write
#[derive(Debug, Default)]
pub struct BackendLog {
    /// Bodies of POST /festival
    pub created: Vec<Value>,
    /// (year, body) of PUT /festival/:year
    pub updated: Vec<(i32, Value)>,
    /// Years deleted via POST /festival/:year/delete
    pub deleted_years: Vec<i32>,
    /// Filenames deleted via DELETE /upload/:filename
    pub deleted_uploads: Vec<String>,
    /// Number of POST /upload requests received
    pub uploads: usize,
}

#[derive(Clone)]
struct MockState {
    /// Year index payload served at GET /festival
    years: Arc<Value>,
    log: Arc<Mutex<BackendLog>>,
}

pub struct MockBackend {
    pub base_url: String,
    pub log: Arc<Mutex<BackendLog>>,
}

async fn mock_list(State(state): State<MockState>) -> Json<Value> {
    Json((*state.years).clone())
}

async fn mock_get_year(
    State(state): State<MockState>,
    Path(year): Path<i32>,
) -> Result<Json<Value>, StatusCode> {
    let entry = state
        .years
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .find(|item| item.get("year").and_then(Value::as_i64) == Some(year as i64))
        })
        .cloned();
    match entry {
        Some(entry) => Ok(Json(json!({ "data": entry.get("data").cloned().unwrap_or(Value::Null) }))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn mock_create(State(state): State<MockState>, Json(body): Json<Value>) -> StatusCode {
    state.log.lock().await.created.push(body);
    StatusCode::OK
}

async fn mock_update(
    State(state): State<MockState>,
    Path(year): Path<i32>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.log.lock().await.updated.push((year, body));
    StatusCode::OK
}

async fn mock_delete_year(State(state): State<MockState>, Path(year): Path<i32>) -> StatusCode {
    state.log.lock().await.deleted_years.push(year);
    StatusCode::OK
}

async fn mock_upload(State(state): State<MockState>) -> Json<Value> {
    state.log.lock().await.uploads += 1;
    Json(json!({ "urls": ["http://cdn.test/stored-1.jpg", "http://cdn.test/stored-2.jpg"] }))
}

async fn mock_delete_upload(
    State(state): State<MockState>,
    Path(filename): Path<String>,
) -> StatusCode {
    state.log.lock().await.deleted_uploads.push(filename);
    StatusCode::OK
}

/// Start a mock backend serving the given `GET /festival` payload
pub async fn start_mock_backend(years: Value) -> MockBackend {
    let log = Arc::new(Mutex::new(BackendLog::default()));
    let state = MockState {
        years: Arc::new(years),
        log: Arc::clone(&log),
    };

    let router = Router::new()
        .route("/festival", get(mock_list))
        .route("/festival", post(mock_create))
        .route("/festival/:year", get(mock_get_year))
        .route("/festival/:year", put(mock_update))
        .route("/festival/:year/delete", post(mock_delete_year))
        .route("/upload", post(mock_upload))
        .route("/upload/:filename", delete(mock_delete_upload))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        log,
    }
}

/// Start the utsav-ui service against the given backend; returns its base URL
pub async fn start_ui(backend_url: &str, admin_password: &str) -> String {
    let config = Config {
        backend_url: backend_url.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        admin_username: "admin".to_string(),
        admin_password: admin_password.to_string(),
        session_ttl_seconds: 3600,
    };
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A year index payload with one fully populated year (2024)
pub fn sample_years() -> Value {
    json!([
        {
            "year": 2024,
            "data": {
                "gallery": [
                    {"url": "imgA.jpg", "type": "image"},
                    {"url": "videoB.mp4"}
                ],
                "ladduWinner": {"name": "Ravi", "image": "imgC.jpg"},
                "eventWinners": [
                    {"event": "Rangoli", "winner": "Meera", "image": "imgD.jpg"},
                    {"event": "Aarti", "winner": "Suresh", "image": ""}
                ],
                "idolContributor": {"name": "Sharma family", "image": ""},
                "otherContributors": [
                    {"name": "Anil", "amount": 1000},
                    {"name": "Sunita", "amount": "501"}
                ],
                "expenses": [{"category": "Decoration", "amount": 600}],
                "collection": 25000
            },
            "remaining_amount": 901
        },
        {"year": 2023, "data": {}}
    ])
}
