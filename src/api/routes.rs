//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, list_links_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All registry-backed routes.
///
/// # Endpoints
///
/// - `GET    /links`          - List every link
/// - `GET    /health`         - Registry health
/// - `POST   /shorten`        - Create a short link
/// - `DELETE /delete/{code}`  - Delete a short link
/// - `GET    /{code}`         - Redirect to the target
///
/// Static segments win over `/{code}`, and a known path hit with the wrong
/// method answers `405 Method Not Allowed`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/delete/{code}", delete(delete_link_handler))
        .route("/{code}", get(redirect_handler))
}
