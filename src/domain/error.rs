//! Error taxonomy of the link registry.

use std::io;
use thiserror::Error;

/// Errors returned by [`crate::application::services::LinkRegistry`] operations.
///
/// Validation variants are raised before any persistence attempt. Storage
/// variants abort the in-flight operation and leave the last committed file intact.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Target URL is empty or not a well-formed http(s) URL.
    #[error("invalid target URL: {reason}")]
    InvalidTarget { reason: String },

    /// Requested code cannot be used as a URL path segment.
    #[error("invalid code: {reason}")]
    InvalidCode { reason: String },

    /// Requested code is already registered.
    #[error("code '{code}' already exists")]
    CodeConflict { code: String },

    /// No link is registered under this code.
    #[error("code '{code}' not found")]
    NotFound { code: String },

    /// Reading, writing or renaming the links file failed.
    #[error("storage failure while {context}: {source}")]
    StorageFailure {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Random code generation kept colliding.
    #[error("failed to generate a unique code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

impl RegistryError {
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    pub fn invalid_code(reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            reason: reason.into(),
        }
    }

    pub fn storage(context: impl Into<String>, source: io::Error) -> Self {
        Self::StorageFailure {
            context: context.into(),
            source,
        }
    }

    /// Returns true for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTarget { .. }
                | Self::InvalidCode { .. }
                | Self::CodeConflict { .. }
                | Self::NotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RegistryError::CodeConflict {
            code: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "code 'abc123' already exists");

        let err = RegistryError::GenerationExhausted { attempts: 10 };
        assert!(err.to_string().contains("10 attempts"));
    }

    #[test]
    fn test_storage_failure_keeps_source() {
        use std::error::Error as _;

        let err = RegistryError::storage(
            "writing links file",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(err.to_string().starts_with("storage failure while writing links file"));
        assert!(err.source().is_some());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(RegistryError::invalid_target("empty").is_client_error());
        assert!(RegistryError::invalid_code("reserved").is_client_error());
        assert!(
            RegistryError::NotFound {
                code: "x".to_string()
            }
            .is_client_error()
        );
        assert!(!RegistryError::GenerationExhausted { attempts: 1 }.is_client_error());
    }
}
