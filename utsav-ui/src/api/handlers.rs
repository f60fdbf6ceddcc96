//! Read-side HTTP request handlers
//!
//! The public archive endpoints. Fetch failures on the year view degrade to
//! the default (empty) record rather than an error page; only the year index
//! surfaces backend failures, since it has nothing sensible to default to.

use crate::api::{backend_error, error_response, ApiError};
use crate::archive::LoadedYear;
use crate::view::YearView;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utsav_common::finance::aggregate;
use utsav_common::flatten::{flatten, FlattenedMediaEntry};
use utsav_common::home::{sample_feed, year_span, HomeImage, YearSpan, HOME_FEED_LIMIT};
use utsav_common::viewer::MediaViewer;
use utsav_common::YearRecord;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "utsav-ui".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeedResponse {
    /// Up to [`HOME_FEED_LIMIT`] gallery images sampled across all years
    images: Vec<HomeImage>,
    /// Span of archived years; absent while the archive is empty
    #[serde(flatten)]
    span: Option<YearSpan>,
}

/// GET /api/home - Cross-year media feed for the home page
///
/// Samples declared gallery images from every archived year and reports the
/// year range. A backend failure degrades to an empty feed; the home page
/// never errors.
pub async fn home_feed(State(state): State<AppState>) -> Json<HomeFeedResponse> {
    let entries = match state.backend.list_years().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Year index fetch failed, home feed is empty: {}", e);
            Vec::new()
        }
    };

    Json(HomeFeedResponse {
        images: sample_feed(&entries, HOME_FEED_LIMIT),
        span: year_span(&entries),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearIndexEntry {
    year: i32,
    /// Remaining balance computed from the record's own lists
    remaining: f64,
    /// Remaining amount as reported by the backend, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    reported_remaining: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct YearIndexResponse {
    years: Vec<YearIndexEntry>,
}

/// GET /api/years - Year index for the archive list page
pub async fn list_years(
    State(state): State<AppState>,
) -> Result<Json<YearIndexResponse>, ApiError> {
    let entries = state.backend.list_years().await.map_err(backend_error)?;

    let years = entries
        .into_iter()
        .map(|entry| YearIndexEntry {
            year: entry.year,
            remaining: aggregate(&entry.record).remaining,
            reported_remaining: entry.remaining_amount,
        })
        .collect();

    Ok(Json(YearIndexResponse { years }))
}

/// GET /api/archive/:year - Assembled view of one festival year
///
/// Takes a generation token before fetching so a slow response for a
/// previously requested year cannot overwrite a newer one. The response to
/// THIS request always reflects its own fetch, stored or not.
pub async fn year_view(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Json<YearView> {
    let token = state.archive.begin_load();

    let (record, loaded) = match state.backend.fetch_year(year).await {
        Ok(record) => (record, true),
        Err(e) => {
            warn!("Fetch for year {} failed, showing empty record: {}", year, e);
            (YearRecord::default(), false)
        }
    };

    let stored = state
        .archive
        .complete_load(
            token,
            LoadedYear {
                year,
                record: record.clone(),
                loaded,
            },
        )
        .await;
    if !stored {
        debug!("Load of year {} superseded by a newer navigation", year);
    }

    Json(YearView::assemble(year, record, loaded))
}

/// GET /api/archive/current - Newest loaded year view
pub async fn current_year(
    State(state): State<AppState>,
) -> Result<Json<YearView>, ApiError> {
    match state.archive.current().await {
        Some(current) => Ok(Json(YearView::assemble(
            current.year,
            current.record,
            current.loaded,
        ))),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            "No year loaded yet",
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    /// URL of the clicked media item
    pub open: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerModelResponse {
    pub items: Vec<FlattenedMediaEntry>,
    /// Whether the viewer opens (an open request on an empty sequence is
    /// rejected silently)
    pub open: bool,
    /// Index the viewer opens at, when it opens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_index: Option<usize>,
}

/// GET /api/archive/:year/viewer?open=<url> - Viewer model for one year
///
/// Resolves the clicked URL to its global index exactly as the modal viewer
/// does: first match wins, an unmatched URL opens at 0, and an empty media
/// sequence refuses to open.
pub async fn viewer_model(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<ViewerQuery>,
) -> Json<ViewerModelResponse> {
    let record = match state.backend.fetch_year(year).await {
        Ok(record) => record,
        Err(e) => {
            warn!("Fetch for year {} failed, viewer gets empty sequence: {}", year, e);
            YearRecord::default()
        }
    };

    let mut viewer = MediaViewer::new(flatten(&record));
    let open = match query.open.as_deref() {
        Some(url) => viewer.request_open(url),
        None => false,
    };

    Json(ViewerModelResponse {
        items: viewer.items().to_vec(),
        open,
        initial_index: viewer.current_index(),
    })
}
