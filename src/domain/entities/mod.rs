//! Core domain entities.
//!
//! - [`LinkEntry`] - A single code-to-target mapping
//! - [`LinkMap`] - The whole registry state, as held in memory and on disk

pub mod link;

pub use link::{LinkEntry, LinkMap};
