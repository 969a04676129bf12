//! # Link Registry
//!
//! A small URL shortening service built with Axum around a durable,
//! file-backed link registry.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entities, the registry error taxonomy and the store trait
//! - **Application Layer** ([`application`]) - The [`LinkRegistry`] and its locking discipline
//! - **Infrastructure Layer** ([`infrastructure`]) - Atomic JSON file persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Guarantees
//!
//! - Codes are unique, case-sensitive and immutable once created
//! - Every create/delete is persisted before the call returns
//! - The links file is replaced atomically (temp file + rename), never truncated in place
//! - Concurrent writers are serialized, so no update is ever lost
//!
//! ## Quick Start
//!
//! ```bash
//! export LINKS_FILE="./data/links.json"   # Optional, defaults to links.json
//! cargo run
//!
//! curl -X POST localhost:3000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::LinkRegistry;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkRegistry;
    pub use crate::domain::entities::{LinkEntry, LinkMap};
    pub use crate::domain::error::RegistryError;
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileStore;
    pub use crate::state::AppState;
}
