//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `302 Found` with the stored target in `Location`. Targets holding
/// raw non-ASCII characters are sent percent-encoded.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.registry.lookup(&code).await?.ok_or_else(|| {
        AppError::not_found("Short link not found", json!({ "code": code }))
    })?;

    debug!(code = %code, target = %target, "Redirecting");

    let location = location_header(&target)?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    if target.is_ascii()
        && let Ok(value) = HeaderValue::from_str(target)
    {
        return Ok(value);
    }

    Url::parse(target)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored target is not a valid location", json!({})))
}
