//! DTOs for link listing and deletion endpoints.

use serde::Serialize;

/// Response for a deleted link.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: String,
}
