//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into registry operations and formats
//! responses. It holds no state of its own.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
