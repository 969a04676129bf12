//! HTTP-facing error type.
//!
//! Every handler returns [`AppError`], which renders as
//! `{"error": {"code", "message", "details"}}` with a matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::RegistryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        code: &'static str,
        message: String,
        details: Value,
    },
    NotFound {
        message: String,
        details: Value,
    },
    Internal {
        code: &'static str,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            code: "validation_error",
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation {
                code,
                message,
                details,
            }
            | AppError::Internal {
                code,
                message,
                details,
            } => (*code, message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        if err.is_client_error() {
            tracing::debug!(error = %err, "Registry rejected request");
        } else {
            tracing::error!(error = %err, "Registry operation failed");
        }

        match err {
            RegistryError::InvalidTarget { reason } => Self::Validation {
                code: "invalid_target",
                message: "Invalid target URL".to_string(),
                details: json!({ "reason": reason }),
            },
            RegistryError::InvalidCode { reason } => Self::Validation {
                code: "invalid_code",
                message: "Invalid short code".to_string(),
                details: json!({ "reason": reason }),
            },
            RegistryError::CodeConflict { code } => Self::Validation {
                code: "code_conflict",
                message: "Short code already exists".to_string(),
                details: json!({ "code": code }),
            },
            RegistryError::NotFound { code } => {
                Self::not_found("Short link not found", json!({ "code": code }))
            }
            RegistryError::StorageFailure { .. } => Self::Internal {
                code: "storage_failure",
                message: "Link storage is unavailable".to_string(),
                details: json!({}),
            },
            RegistryError::GenerationExhausted { attempts } => Self::Internal {
                code: "generation_exhausted",
                message: "Failed to generate a unique code".to_string(),
                details: json!({ "attempts": attempts }),
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        Self::bad_request(
            "Request validation failed",
            json!({ "fields": fields, "errors": errors }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_registry_error_status_mapping() {
        let cases = [
            (
                RegistryError::invalid_target("empty"),
                StatusCode::BAD_REQUEST,
                "invalid_target",
            ),
            (
                RegistryError::invalid_code("reserved"),
                StatusCode::BAD_REQUEST,
                "invalid_code",
            ),
            (
                RegistryError::CodeConflict {
                    code: "abc".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "code_conflict",
            ),
            (
                RegistryError::NotFound {
                    code: "abc".to_string(),
                },
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                RegistryError::storage("reading", io::Error::other("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_failure",
            ),
            (
                RegistryError::GenerationExhausted { attempts: 10 },
                StatusCode::INTERNAL_SERVER_ERROR,
                "generation_exhausted",
            ),
        ];

        for (err, status, code) in cases {
            let app: AppError = err.into();
            assert_eq!(app.status(), status);
            assert_eq!(app.to_error_info().code, code);
        }
    }

    #[test]
    fn test_storage_failure_hides_path() {
        let app: AppError = RegistryError::storage(
            "reading /secret/links.json",
            io::Error::from(io::ErrorKind::PermissionDenied),
        )
        .into();

        let info = app.to_error_info();
        assert!(!info.message.contains("/secret"));
        assert!(!info.details.to_string().contains("/secret"));
    }

    #[test]
    fn test_display() {
        let app = AppError::not_found("Short link not found", json!({}));
        assert_eq!(app.to_string(), "not_found: Short link not found");
    }
}
