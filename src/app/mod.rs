pub mod action;
pub mod builder;
pub mod dialog;
pub mod effect;
pub mod field;
pub mod form_state;
pub mod ports;
pub mod session;
pub mod template;
pub mod validate;

pub use action::Action;
pub use dialog::{DialogPhase, SetupDialog, reduce};
pub use effect::Effect;
pub use form_state::FormState;
pub use session::{CatalogSession, SessionError};
pub use validate::{ValidationOutcome, validate};
