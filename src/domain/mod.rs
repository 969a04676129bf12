//! Domain layer containing business entities and contracts.
//!
//! This module has no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Link records and the code-to-target map
//! - [`error`] - The registry error taxonomy
//! - [`repositories`] - The [`repositories::LinkStore`] persistence contract
//!
//! # Mutation Flow
//!
//! 1. HTTP handler calls [`crate::application::services::LinkRegistry`]
//! 2. Input is validated before any I/O
//! 3. The registry takes its writer lock and reloads state via [`repositories::LinkStore::load`]
//! 4. The whole map is committed via [`repositories::LinkStore::save`]
//! 5. The in-memory snapshot is swapped and the lock is released

pub mod entities;
pub mod error;
pub mod repositories;
