//! Application layer services.
//!
//! Services orchestrate validation, locking and persistence on top of the
//! domain contracts and expose a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_registry::LinkRegistry`] - The code-to-target registry
pub mod services;
