pub mod catalog;
pub mod datastore;

pub use catalog::{Catalog, CatalogError};
