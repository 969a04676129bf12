//! JSON file implementation of the link store.
//!
//! # File Format
//!
//! One JSON object, keys are codes and values are target URLs:
//!
//! ```json
//! {
//!   "abc123": "https://example.com",
//!   "docs": "https://docs.rs"
//! }
//! ```
//!
//! # Atomic Writes
//!
//! The full document is written to a temporary file in the same directory,
//! flushed with `fsync`, and renamed over the canonical path. Readers and
//! crash recovery only ever see a complete old or a complete new document.
//!
//! # Recovery Policy
//!
//! A missing file is created empty. A file that fails to parse is logged and
//! reset to an empty document; no partial merge is attempted. Every other I/O
//! error is reported as [`RegistryError::StorageFailure`].

use async_trait::async_trait;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::domain::entities::LinkMap;
use crate::domain::error::RegistryError;
use crate::domain::repositories::LinkStore;

/// Link store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
}

impl JsonFileStore {
    /// Creates a store for `path`. Nothing is touched on disk until the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Canonical path of the links file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn load_blocking(path: &Path) -> Result<LinkMap, RegistryError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Links file not found, creating empty registry");
                let links = LinkMap::new();
                Self::write_atomic(path, &links)?;
                return Ok(links);
            }
            Err(e) => {
                return Err(RegistryError::storage(
                    format!("reading {}", path.display()),
                    e,
                ));
            }
        };

        match serde_json::from_slice::<LinkMap>(&bytes) {
            Ok(links) => {
                debug!(path = %path.display(), count = links.len(), "Loaded links file");
                Ok(links)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Links file is not valid JSON, resetting to an empty registry"
                );
                let links = LinkMap::new();
                Self::write_atomic(path, &links)?;
                Ok(links)
            }
        }
    }

    fn write_atomic(path: &Path, links: &LinkMap) -> Result<(), RegistryError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        fs::create_dir_all(dir)
            .map_err(|e| RegistryError::storage(format!("creating {}", dir.display()), e))?;

        let mut json = serde_json::to_vec_pretty(links)
            .map_err(|e| RegistryError::storage("serializing links", io::Error::other(e)))?;
        json.push(b'\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
            RegistryError::storage(format!("creating temp file in {}", dir.display()), e)
        })?;

        // Keep whatever mode the operator gave the existing file.
        if let Ok(meta) = fs::metadata(path)
            && let Err(e) = tmp.as_file().set_permissions(meta.permissions())
        {
            warn!(path = %path.display(), error = %e, "Failed to copy links file permissions");
        }

        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| RegistryError::storage("writing temp links file", e))?;

        tmp.persist(path).map_err(|e| {
            RegistryError::storage(format!("replacing {}", path.display()), e.error)
        })?;

        sync_dir(dir);

        debug!(path = %path.display(), count = links.len(), bytes = json.len(), "Committed links file");
        Ok(())
    }
}

/// Flushes the directory entry after a rename so the new name survives a crash.
#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
        warn!(dir = %dir.display(), error = %e, "Failed to sync links directory");
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}

fn join_error(e: tokio::task::JoinError) -> RegistryError {
    RegistryError::storage("running blocking file task", io::Error::other(e))
}

#[async_trait]
impl LinkStore for JsonFileStore {
    async fn load(&self) -> Result<LinkMap, RegistryError> {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || Self::load_blocking(&path))
            .await
            .map_err(join_error)?
    }

    async fn save(&self, links: &LinkMap) -> Result<(), RegistryError> {
        let path = Arc::clone(&self.path);
        let links = links.clone();
        tokio::task::spawn_blocking(move || Self::write_atomic(&path, &links))
            .await
            .map_err(join_error)?
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
