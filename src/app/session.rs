//! Executes dialog effects against the catalog and its store.

use std::sync::Arc;

use thiserror::Error;

use crate::app::effect::Effect;
use crate::app::ports::{CatalogStore, CatalogStoreError};
use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::datastore::{DatastoreConfig, DatastoreName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] CatalogStoreError),
}

/// Owns the live catalog and keeps it in sync with the persistence port.
///
/// Mutations are staged on a scratch copy and only swapped in once the
/// store accepted them, so a failed save never leaves a half-applied
/// catalog in memory.
pub struct CatalogSession {
    catalog: Catalog,
    store: Arc<dyn CatalogStore>,
}

impl CatalogSession {
    pub fn open(store: Arc<dyn CatalogStore>) -> Result<Self, SessionError> {
        let entries = store.load()?;
        let catalog = Catalog::from_entries(entries)?;
        Ok(Self { catalog, store })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes one dialog effect. `ShowError` and `Close` belong to the
    /// presentation layer and are no-ops here.
    pub fn execute(&mut self, effect: Effect) -> Result<(), SessionError> {
        match effect {
            Effect::Commit { config, replaces } => self.commit(config, replaces),
            Effect::ShowError(_) | Effect::Close => Ok(()),
        }
    }

    pub fn commit(
        &mut self,
        config: DatastoreConfig,
        replaces: Option<DatastoreName>,
    ) -> Result<(), SessionError> {
        let mut staged = self.catalog.clone();
        match replaces {
            Some(old_name) => staged.replace(&old_name, config)?,
            None => staged.add(config)?,
        }
        self.persist(&staged)?;
        self.catalog = staged;
        Ok(())
    }

    pub fn remove(&mut self, name: &DatastoreName) -> Result<DatastoreConfig, SessionError> {
        let mut staged = self.catalog.clone();
        let removed = staged.remove(name)?;
        self.persist(&staged)?;
        self.catalog = staged;
        Ok(removed)
    }

    fn persist(&self, staged: &Catalog) -> Result<(), CatalogStoreError> {
        let entries: Vec<DatastoreConfig> = staged.iter().cloned().collect();
        self.store.save(&entries)
    }
}
