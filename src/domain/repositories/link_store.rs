//! Store trait for durable link persistence.

use crate::domain::entities::LinkMap;
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// Durable backing storage for the whole link map.
///
/// The store only reads and replaces the complete map. Serializing access
/// is the caller's job: [`crate::application::services::LinkRegistry`] holds
/// its writer lock across every `load` → `save` cycle.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - Pretty-printed JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Reads the current durable state.
    ///
    /// A missing or unparseable backing file yields an empty map and is
    /// rewritten as a valid empty document.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageFailure`] on any other I/O error.
    async fn load(&self) -> Result<LinkMap, RegistryError>;

    /// Atomically replaces the durable state with `links`.
    ///
    /// Observers see either the previous or the new state, never a mix.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageFailure`] if the write or the final
    /// replace fails. The previously committed state is left untouched.
    async fn save(&self, links: &LinkMap) -> Result<(), RegistryError>;

    /// Human-readable location of the backing storage, for logs.
    fn describe(&self) -> String;
}
