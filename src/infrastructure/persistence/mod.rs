//! Durable storage implementations.
//!
//! # Stores
//!
//! - [`JsonFileStore`] - Single pretty-printed JSON file, replaced atomically on every write

pub mod json_file_store;

pub use json_file_store::JsonFileStore;
