use std::path::PathBuf;

use thiserror::Error;

use crate::domain::datastore::DatastoreConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogStoreError {
    #[error("Catalog version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Persistence port for the datastore catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogStore: Send + Sync {
    /// Loads every persisted configuration, empty when nothing was saved yet.
    fn load(&self) -> Result<Vec<DatastoreConfig>, CatalogStoreError>;

    /// Persists the full catalog, replacing whatever was stored before.
    fn save(&self, entries: &[DatastoreConfig]) -> Result<(), CatalogStoreError>;

    fn storage_path(&self) -> PathBuf;
}
