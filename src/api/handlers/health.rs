//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The links file is readable
/// - **503 Service Unavailable**: The registry could not load its store
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "42 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state).await;
    let healthy = registry_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the registry state is loaded and readable.
async fn check_registry(state: &AppState) -> CheckStatus {
    match state.registry.len().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} links", count)),
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some("Links store unavailable".to_string()),
            }
        }
    }
}
