//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - File-backed [`crate::domain::repositories::LinkStore`] implementation

pub mod persistence;
