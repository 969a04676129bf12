//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Static `index.html`
//! - `GET  /{code}`  - Short link redirect
//! - everything else - see [`crate::api::routes::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Constructs the router with all routes and the tracing layer.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory whose `index.html` is served at `/`
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// [`router`] wrapped so that `/links/` and `/links` are the same route.
pub fn app_router(state: AppState, static_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
