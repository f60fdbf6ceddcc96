//! utsav-ui library - Festival archive front-end service
//!
//! Serves the read-side archive API (year index, assembled year views,
//! viewer models) and the admin write proxies against the external festival
//! backend.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utsav_common::api::BackendClient;
use utsav_common::config::Config;

pub mod api;
pub mod archive;
pub mod session;
pub mod view;

use archive::ArchiveState;
use session::SessionStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the external festival backend
    pub backend: BackendClient,
    /// Last-requested-wins year navigation state
    pub archive: Arc<ArchiveState>,
    /// Admin session tokens
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from resolved configuration
    pub fn new(config: Config) -> Self {
        let backend = BackendClient::new(config.backend_url.clone());
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(
            config.session_ttl_seconds,
        )));
        Self {
            backend,
            archive: Arc::new(ArchiveState::new()),
            sessions,
            config: Arc::new(config),
        }
    }
}

/// Build application router
///
/// Public routes serve the archive; admin routes sit behind the session
/// middleware.
pub fn build_router(state: AppState) -> Router {
    // Protected routes (require a live admin session)
    let admin = Router::new()
        .route("/api/admin/years", post(api::admin::create_year))
        .route("/api/admin/years/:year", put(api::admin::update_year))
        .route("/api/admin/years/:year/delete", post(api::admin::delete_year))
        .route("/api/admin/upload", post(api::admin::upload))
        .route("/api/admin/upload/:filename", delete(api::admin::delete_upload))
        .route("/api/admin/logout", post(api::admin::logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth::require_session,
        ));

    // Public routes (no authentication)
    let public = Router::new()
        .route("/health", get(api::handlers::health))
        .route("/api/home", get(api::handlers::home_feed))
        .route("/api/years", get(api::handlers::list_years))
        .route("/api/archive/current", get(api::handlers::current_year))
        .route("/api/archive/:year", get(api::handlers::year_view))
        .route("/api/archive/:year/viewer", get(api::handlers::viewer_model))
        .route("/api/admin/login", post(api::admin::login));

    Router::new()
        .merge(public)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
