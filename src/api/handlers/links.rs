//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::DeleteResponse;
use crate::domain::entities::LinkMap;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered link as a `code -> target` object.
///
/// # Endpoint
///
/// `GET /links`
///
/// # Response
///
/// ```json
/// {
///   "abc123": "https://example.com",
///   "docs": "https://docs.rs"
/// }
/// ```
pub async fn list_links_handler(State(state): State<AppState>) -> Result<Json<LinkMap>, AppError> {
    let links = state.registry.list_all().await?;
    Ok(Json(links))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Response
///
/// ```json
/// { "deleted": "abc123" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist (including a repeated delete).
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.registry.delete(&code).await?;
    Ok(Json(DeleteResponse { deleted: code }))
}
