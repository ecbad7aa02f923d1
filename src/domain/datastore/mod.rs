mod config;
mod kind;
mod name;

pub use config::{DatastoreConfig, DatastoreParams};
pub use kind::DatastoreKind;
pub use name::{DatastoreName, DatastoreNameError};
