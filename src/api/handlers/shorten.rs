//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "shortCode": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "my-link",
///   "url": "https://example.com",
///   "shortUrl": "http://localhost:3000/my-link"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the URL is invalid,
/// the code is invalid, or the code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let code = state
        .registry
        .create(payload.short_code, &payload.url)
        .await?;

    // The registry stores the trimmed input verbatim.
    let url = payload.url.trim().to_string();
    let short_url = state.short_url(&code);

    Ok(Json(ShortenResponse {
        code,
        url,
        short_url,
    }))
}
