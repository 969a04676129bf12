//! Persistence contract for the domain layer.
//!
//! The registry never touches the filesystem directly; it goes through
//! [`LinkStore`], implemented in `crate::infrastructure::persistence`.
//! A `mockall` mock is generated for unit tests.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
