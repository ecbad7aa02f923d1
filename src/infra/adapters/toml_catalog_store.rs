use std::fs;
use std::path::PathBuf;

use crate::app::ports::{CatalogStore, CatalogStoreError};
use crate::domain::datastore::DatastoreConfig;
use crate::infra::config::catalog_file::{CURRENT_VERSION, CatalogFile};

const CATALOG_FILE_NAME: &str = "datastores.toml";

pub struct TomlCatalogStore {
    config_dir: PathBuf,
}

impl TomlCatalogStore {
    pub fn new() -> Result<Self, CatalogStoreError> {
        let config_dir = get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn catalog_file_path(&self) -> PathBuf {
        self.config_dir.join(CATALOG_FILE_NAME)
    }
}

impl CatalogStore for TomlCatalogStore {
    fn load(&self) -> Result<Vec<DatastoreConfig>, CatalogStoreError> {
        let path = self.catalog_file_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| CatalogStoreError::ReadError(e.to_string()))?;

        let file: CatalogFile = toml::from_str(&content)
            .map_err(|e| CatalogStoreError::InvalidFormat(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            return Err(CatalogStoreError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        Ok(file.datastores)
    }

    fn save(&self, entries: &[DatastoreConfig]) -> Result<(), CatalogStoreError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| CatalogStoreError::IoError(e.to_string()))?;
        }

        let file = CatalogFile::from_entries(entries);
        let content = toml::to_string_pretty(&file)
            .map_err(|e| CatalogStoreError::WriteError(e.to_string()))?;

        let content_with_header = format!(
            "# datakeep datastore catalog\n# WARNING: Credentials are stored in plain text\n\n{}",
            content
        );

        let path = self.catalog_file_path();
        fs::write(&path, content_with_header)
            .map_err(|e| CatalogStoreError::WriteError(e.to_string()))?;

        set_file_permissions(&path)?;

        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.catalog_file_path()
    }
}

fn get_config_dir() -> Result<PathBuf, CatalogStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| CatalogStoreError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("datakeep"))
}

#[cfg(unix)]
fn set_file_permissions(path: &std::path::Path) -> Result<(), CatalogStoreError> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms).map_err(|e| CatalogStoreError::IoError(e.to_string()))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &std::path::Path) -> Result<(), CatalogStoreError> {
    Ok(())
}
