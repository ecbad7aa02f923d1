//! Setup dialog lifecycle.
//!
//! One dialog owns one form state. Every edit re-runs the validator and the
//! phase tracks the latest outcome; confirm is only honored when that
//! outcome allows submission. `Submitted` and `Cancelled` are terminal:
//! further actions are ignored and the catalog is never touched after
//! `Cancelled`.

use crate::app::action::Action;
use crate::app::builder;
use crate::app::effect::Effect;
use crate::app::form_state::FormState;
use crate::app::validate::{ValidationOutcome, validate};
use crate::domain::datastore::{DatastoreConfig, DatastoreKind, DatastoreName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    /// Open, no edit has run the validator yet.
    #[default]
    Editing,
    Valid,
    Invalid,
    Submitted,
    Cancelled,
}

impl DialogPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted | Self::Cancelled)
    }
}

#[derive(Debug, Clone)]
pub struct SetupDialog {
    form: FormState,
    phase: DialogPhase,
    /// Original name when editing an existing config; `None` in the create
    /// flow.
    replaces: Option<DatastoreName>,
    last_outcome: ValidationOutcome,
}

impl SetupDialog {
    /// Create flow: defaults from the kind's template.
    pub fn create(kind: DatastoreKind) -> Self {
        Self {
            form: FormState::from_template(kind),
            phase: DialogPhase::Editing,
            replaces: None,
            last_outcome: ValidationOutcome::Valid,
        }
    }

    /// Edit flow: pre-populated from an existing config, which stays in the
    /// catalog untouched until the commit effect is applied.
    pub fn edit(config: &DatastoreConfig) -> Self {
        Self {
            form: FormState::from_config(config),
            phase: DialogPhase::Editing,
            replaces: Some(config.name.clone()),
            last_outcome: ValidationOutcome::Valid,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn last_outcome(&self) -> &ValidationOutcome {
        &self.last_outcome
    }

    /// Whether the save action is currently enabled.
    pub fn can_confirm(&self) -> bool {
        match self.phase {
            DialogPhase::Valid => true,
            DialogPhase::Editing => validate(&self.form).allows_submit(),
            _ => false,
        }
    }

    /// Programmatic edit for headless callers: sets a whole field value and
    /// re-runs the validator, like any other edit. Returns false when the
    /// kind's template has no such field (the value is discarded) or the
    /// dialog is already terminal.
    #[must_use = "an unknown field id means the value was dropped"]
    pub fn set_field(&mut self, id: &str, value: impl Into<String>) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        if !self.form.set(id, value) {
            return false;
        }
        self.revalidate();
        true
    }

    fn revalidate(&mut self) {
        self.last_outcome = validate(&self.form);
        self.phase = if self.last_outcome.allows_submit() {
            DialogPhase::Valid
        } else {
            DialogPhase::Invalid
        };
    }
}

/// Applies one action and returns the effects for the session to execute.
pub fn reduce(dialog: &mut SetupDialog, action: &Action) -> Vec<Effect> {
    if dialog.phase.is_terminal() {
        return vec![];
    }

    match action {
        Action::Input(c) => {
            dialog.form.insert_char(*c);
            dialog.revalidate();
            vec![]
        }
        Action::Backspace => {
            dialog.form.backspace();
            dialog.revalidate();
            vec![]
        }
        Action::NextField => {
            dialog.form.focus_next();
            dialog.revalidate();
            vec![]
        }
        Action::PrevField => {
            dialog.form.focus_prev();
            dialog.revalidate();
            vec![]
        }
        Action::Confirm => {
            dialog.revalidate();
            if dialog.phase != DialogPhase::Valid {
                // save is unreachable while invalid
                return vec![];
            }
            match builder::build(&dialog.form) {
                Ok(config) => {
                    dialog.phase = DialogPhase::Submitted;
                    vec![
                        Effect::Commit {
                            config,
                            replaces: dialog.replaces.clone(),
                        },
                        Effect::Close,
                    ]
                }
                // unreachable after validation; abort without mutation
                Err(err) => vec![Effect::ShowError(err.to_string())],
            }
        }
        Action::Cancel => {
            dialog.phase = DialogPhase::Cancelled;
            vec![Effect::Close]
        }
    }
}
