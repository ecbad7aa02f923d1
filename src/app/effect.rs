//! Side effects emitted by the dialog reducer, executed by the session.

use crate::domain::datastore::{DatastoreConfig, DatastoreName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Register the config, replacing `replaces` when set (edit flow).
    Commit {
        config: DatastoreConfig,
        replaces: Option<DatastoreName>,
    },
    /// Surface a non-fatal error to the user; the dialog stays open.
    ShowError(String),
    /// Release the dialog's resources.
    Close,
}

impl Effect {
    pub fn is_commit(&self) -> bool {
        matches!(self, Effect::Commit { .. })
    }
}
