pub mod toml_catalog_store;

pub use toml_catalog_store::TomlCatalogStore;
