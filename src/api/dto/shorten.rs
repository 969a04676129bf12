//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Field names are camelCase on the wire; `short_code` is accepted as an alias.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The target URL. Syntax is checked by the registry.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,

    /// Optional requested short code. Blank means "generate one".
    #[serde(default, alias = "short_code")]
    #[validate(length(max = 64, message = "Short code is too long"))]
    pub short_code: Option<String>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub url: String,
    pub short_url: String,
}
