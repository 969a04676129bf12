//! The link registry: sole owner of the code-to-target mapping.
//!
//! # Locking
//!
//! A single [`RwLock`] guards the in-memory map. Mutations hold the write
//! guard across the whole reload → validate → persist → swap cycle, so two
//! writers can never start from the same snapshot and readers never observe
//! a change before it is on disk. Reads share the read guard.
//!
//! # Loading
//!
//! Nothing is read until the first operation. Every mutation re-reads the
//! store before computing its change, which also picks up hand edits.

use std::fmt;
use std::io;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::entities::LinkMap;
use crate::domain::error::RegistryError;
use crate::domain::repositories::LinkStore;
use crate::utils::code_generator::{generate_code, validate_code};
use crate::utils::target_validator::validate_target;

/// Default bound on random code generation attempts per create.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Source of candidate codes. `None` means the random source failed.
pub type CodeGenerator = fn() -> Option<String>;

/// Concurrent, durably persisted code-to-target registry.
///
/// Construct once at startup and share it as `Arc<LinkRegistry>`.
pub struct LinkRegistry {
    store: Arc<dyn LinkStore>,
    links: Arc<RwLock<Option<LinkMap>>>,
    max_attempts: usize,
    generate: CodeGenerator,
}

impl fmt::Debug for LinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkRegistry")
            .field("store", &self.store.describe())
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl LinkRegistry {
    /// Creates a registry over `store`. The store is not read until first use.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self {
            store,
            links: Arc::new(RwLock::new(None)),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            generate: generate_code,
        }
    }

    /// Sets how many generated codes may collide before a create gives up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Replaces the random code source.
    pub fn with_code_generator(mut self, generate: CodeGenerator) -> Self {
        self.generate = generate;
        self
    }

    /// Location of the backing store, for logs and diagnostics.
    pub fn store_description(&self) -> String {
        self.store.describe()
    }

    /// Registers `target` under `requested_code`, or under a generated code.
    ///
    /// A requested code is trimmed; if it is then empty a code is generated.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidTarget`] / [`RegistryError::InvalidCode`] before any I/O
    /// - [`RegistryError::CodeConflict`] if the requested code exists (nothing is written)
    /// - [`RegistryError::GenerationExhausted`] if every generated code collided
    /// - [`RegistryError::StorageFailure`] if the store cannot be read or written
    pub async fn create(
        &self,
        requested_code: Option<String>,
        target: &str,
    ) -> Result<String, RegistryError> {
        let target = validate_target(target)?;

        let requested = requested_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());
        if let Some(code) = &requested {
            validate_code(code)?;
        }

        let max_attempts = self.max_attempts;
        let generate = self.generate;
        let stored_target = target.clone();

        let code = self
            .mutate(move |links| {
                let code = match requested {
                    Some(code) if links.contains_key(&code) => {
                        debug!(code = %code, "Requested code already exists");
                        return Err(RegistryError::CodeConflict { code });
                    }
                    Some(code) => code,
                    None => generate_unique(links, generate, max_attempts)?,
                };
                links.insert(code.clone(), stored_target);
                Ok(code)
            })
            .await?;

        info!(code = %code, target = %target, "Link created");
        Ok(code)
    }

    /// Returns the target registered under `code`, if any.
    ///
    /// # Errors
    ///
    /// Only the first call on a fresh registry reads the store, and only that
    /// read can fail, with [`RegistryError::StorageFailure`].
    pub async fn lookup(&self, code: &str) -> Result<Option<String>, RegistryError> {
        let target = self.read(|links| links.get(code).cloned()).await?;
        debug!(code, hit = target.is_some(), "Link lookup");
        Ok(target)
    }

    /// Removes the link registered under `code`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is not registered
    /// - [`RegistryError::StorageFailure`] if the store cannot be read or written
    pub async fn delete(&self, code: &str) -> Result<(), RegistryError> {
        let owned = code.to_string();

        self.mutate(move |links| match links.remove(&owned) {
            Some(_) => Ok(()),
            None => Err(RegistryError::NotFound { code: owned }),
        })
        .await?;

        info!(code, "Link deleted");
        Ok(())
    }

    /// Returns a copy of every registered link.
    pub async fn list_all(&self) -> Result<LinkMap, RegistryError> {
        self.read(LinkMap::clone).await
    }

    /// Number of registered links.
    pub async fn len(&self) -> Result<usize, RegistryError> {
        self.read(LinkMap::len).await
    }

    /// Returns true if no links are registered.
    pub async fn is_empty(&self) -> Result<bool, RegistryError> {
        self.read(LinkMap::is_empty).await
    }

    /// Re-reads the store and replaces the in-memory map.
    ///
    /// Returns the number of links now registered.
    pub async fn reload(&self) -> Result<usize, RegistryError> {
        let mut guard = self.links.write().await;
        let links = refresh(self.store.as_ref(), &mut guard).await?;

        info!(store = %self.store.describe(), count = links.len(), "Links reloaded");
        Ok(links.len())
    }

    /// Runs `f` against the current map, loading it on first use.
    async fn read<T>(&self, f: impl FnOnce(&LinkMap) -> T) -> Result<T, RegistryError> {
        {
            let guard = self.links.read().await;
            if let Some(links) = guard.as_ref() {
                return Ok(f(links));
            }
        }

        let mut guard = self.links.write().await;
        let links = match guard.take() {
            Some(links) => links,
            None => {
                let links = self.store.load().await.inspect_err(|e| {
                    error!(store = %self.store.describe(), error = %e, "Failed to load links");
                })?;
                info!(store = %self.store.describe(), count = links.len(), "Links loaded");
                links
            }
        };

        let out = f(&links);
        *guard = Some(links);
        Ok(out)
    }

    /// Applies `change` to the on-disk state and commits the result.
    ///
    /// The reload → change → save → swap cycle runs on its own task holding an
    /// owned write guard. Dropping the caller's future therefore cannot stop
    /// a save half way and leave the in-memory map behind the file.
    async fn mutate<T, F>(&self, change: F) -> Result<T, RegistryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut LinkMap) -> Result<T, RegistryError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.links);

        let task = tokio::spawn(async move {
            let mut guard = state.write_owned().await;
            let mut links = refresh(store.as_ref(), &mut guard).await?;

            let out = change(&mut links)?;

            store.save(&links).await.inspect_err(|e| {
                error!(store = %store.describe(), error = %e, "Failed to persist links");
            })?;
            *guard = Some(links);
            Ok(out)
        });

        task.await.map_err(|e| {
            RegistryError::storage("running registry mutation", io::Error::other(e))
        })?
    }
}

/// Loads the on-disk state and mirrors it in memory.
async fn refresh(
    store: &dyn LinkStore,
    state: &mut Option<LinkMap>,
) -> Result<LinkMap, RegistryError> {
    let links = store.load().await.inspect_err(|e| {
        error!(store = %store.describe(), error = %e, "Failed to load links");
    })?;
    *state = Some(links.clone());
    Ok(links)
}

fn generate_unique(
    links: &LinkMap,
    generate: CodeGenerator,
    max_attempts: usize,
) -> Result<String, RegistryError> {
    for attempt in 1..=max_attempts {
        match generate() {
            Some(code) if !links.contains_key(&code) => return Ok(code),
            Some(code) => debug!(attempt, code = %code, "Generated code collided"),
            None => warn!(attempt, "Code generation failed"),
        }
    }

    error!(attempts = max_attempts, "Failed to generate a unique code");
    Err(RegistryError::GenerationExhausted {
        attempts: max_attempts,
    })
}
