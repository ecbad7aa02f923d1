use thiserror::Error;

use crate::domain::datastore::{DatastoreConfig, DatastoreName};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Datastore name already exists: {0}")]
    DuplicateName(String),
    #[error("Datastore not found: {0}")]
    NotFound(String),
}

/// Mutable registry of datastore configurations.
///
/// Names are unique case-insensitively; insertion order is preserved for
/// presentation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<DatastoreConfig>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DatastoreConfig>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add(entry)?;
        }
        Ok(catalog)
    }

    pub fn add(&mut self, config: DatastoreConfig) -> Result<(), CatalogError> {
        if self.contains(&config.name) {
            return Err(CatalogError::DuplicateName(config.name.to_string()));
        }
        self.entries.push(config);
        Ok(())
    }

    pub fn remove(&mut self, name: &DatastoreName) -> Result<DatastoreConfig, CatalogError> {
        let position = self
            .position_of(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        Ok(self.entries.remove(position))
    }

    /// Swaps one configuration for another in place, used by the edit flow.
    /// The new configuration may carry a different name as long as it does
    /// not collide with a third entry. On error the catalog is unchanged.
    pub fn replace(
        &mut self,
        old_name: &DatastoreName,
        new_config: DatastoreConfig,
    ) -> Result<(), CatalogError> {
        let position = self
            .position_of(old_name)
            .ok_or_else(|| CatalogError::NotFound(old_name.to_string()))?;

        let renamed = new_config.name.normalized() != old_name.normalized();
        if renamed && self.contains(&new_config.name) {
            return Err(CatalogError::DuplicateName(new_config.name.to_string()));
        }

        self.entries[position] = new_config;
        Ok(())
    }

    pub fn get(&self, name: &DatastoreName) -> Option<&DatastoreConfig> {
        self.position_of(name).map(|i| &self.entries[i])
    }

    pub fn contains(&self, name: &DatastoreName) -> bool {
        self.position_of(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &DatastoreName> {
        self.entries.iter().map(|e| &e.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatastoreConfig> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position_of(&self, name: &DatastoreName) -> Option<usize> {
        let wanted = name.normalized();
        self.entries
            .iter()
            .position(|e| e.name.normalized() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::datastore::DatastoreParams;
    use std::path::PathBuf;

    fn config(name: &str) -> DatastoreConfig {
        DatastoreConfig::new(
            DatastoreName::new(name).unwrap(),
            DatastoreParams::Json {
                path: PathBuf::from(format!("/data/{name}.json")),
            },
        )
    }

    fn name(s: &str) -> DatastoreName {
        DatastoreName::new(s).unwrap()
    }

    mod add {
        use super::*;

        #[test]
        fn registers_config() {
            let mut catalog = Catalog::new();
            catalog.add(config("orders")).unwrap();
            assert_eq!(catalog.len(), 1);
            assert!(catalog.contains(&name("orders")));
        }

        #[test]
        fn rejects_duplicate_name() {
            let mut catalog = Catalog::new();
            catalog.add(config("orders")).unwrap();
            let result = catalog.add(config("orders"));
            assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
            assert_eq!(catalog.len(), 1);
        }

        #[test]
        fn duplicate_check_is_case_insensitive() {
            let mut catalog = Catalog::new();
            catalog.add(config("Orders")).unwrap();
            let result = catalog.add(config("ORDERS"));
            assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
        }

        #[test]
        fn preserves_insertion_order() {
            let mut catalog = Catalog::new();
            catalog.add(config("b")).unwrap();
            catalog.add(config("a")).unwrap();
            catalog.add(config("c")).unwrap();
            let names: Vec<_> = catalog.names().map(ToString::to_string).collect();
            assert_eq!(names, vec!["b", "a", "c"]);
        }
    }

    mod remove {
        use super::*;

        #[test]
        fn returns_removed_config() {
            let mut catalog = Catalog::new();
            catalog.add(config("orders")).unwrap();
            let removed = catalog.remove(&name("orders")).unwrap();
            assert_eq!(removed.name.as_str(), "orders");
            assert!(catalog.is_empty());
        }

        #[test]
        fn unknown_name_returns_not_found() {
            let mut catalog = Catalog::new();
            let result = catalog.remove(&name("ghost"));
            assert!(matches!(result, Err(CatalogError::NotFound(_))));
        }
    }

    mod replace {
        use super::*;

        #[test]
        fn swaps_config_in_place() {
            let mut catalog = Catalog::new();
            catalog.add(config("a")).unwrap();
            catalog.add(config("b")).unwrap();
            catalog.add(config("c")).unwrap();

            let updated = DatastoreConfig::new(
                name("b"),
                DatastoreParams::Json {
                    path: PathBuf::from("/data/moved.json"),
                },
            );
            catalog.replace(&name("b"), updated.clone()).unwrap();

            assert_eq!(catalog.get(&name("b")), Some(&updated));
            let names: Vec<_> = catalog.names().map(ToString::to_string).collect();
            assert_eq!(names, vec!["a", "b", "c"]);
        }

        #[test]
        fn allows_rename_to_free_name() {
            let mut catalog = Catalog::new();
            catalog.add(config("old")).unwrap();
            catalog.replace(&name("old"), config("new")).unwrap();
            assert!(!catalog.contains(&name("old")));
            assert!(catalog.contains(&name("new")));
        }

        #[test]
        fn allows_case_only_rename() {
            let mut catalog = Catalog::new();
            catalog.add(config("orders")).unwrap();
            catalog.replace(&name("orders"), config("Orders")).unwrap();
            assert_eq!(catalog.get(&name("orders")).unwrap().name.as_str(), "Orders");
        }

        #[test]
        fn rejects_rename_onto_existing_entry() {
            let mut catalog = Catalog::new();
            catalog.add(config("a")).unwrap();
            catalog.add(config("b")).unwrap();
            let result = catalog.replace(&name("a"), config("b"));
            assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
            // unchanged on error
            assert_eq!(catalog.get(&name("a")), Some(&config("a")));
        }

        #[test]
        fn unknown_old_name_returns_not_found() {
            let mut catalog = Catalog::new();
            let result = catalog.replace(&name("ghost"), config("new"));
            assert!(matches!(result, Err(CatalogError::NotFound(_))));
        }
    }

    mod from_entries {
        use super::*;

        #[test]
        fn builds_catalog_from_vec() {
            let catalog = Catalog::from_entries(vec![config("a"), config("b")]).unwrap();
            assert_eq!(catalog.len(), 2);
        }

        #[test]
        fn rejects_duplicate_in_input() {
            let result = Catalog::from_entries(vec![config("a"), config("A")]);
            assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
        }
    }
}
