use serde::{Deserialize, Serialize};

use crate::domain::datastore::DatastoreConfig;

pub const CURRENT_VERSION: u32 = 1;

/// On-disk schema of `datastores.toml`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    #[serde(default, rename = "datastore")]
    pub datastores: Vec<DatastoreConfig>,
}

impl CatalogFile {
    pub fn from_entries(entries: &[DatastoreConfig]) -> Self {
        Self {
            version: CURRENT_VERSION,
            datastores: entries.to_vec(),
        }
    }
}
