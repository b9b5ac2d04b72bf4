pub mod aggregate;
pub mod button;
pub mod controller;
pub mod error;
pub mod field;
pub mod normalize;
pub mod reference;
pub mod sink;
pub mod store;
pub mod validation;
pub mod verdict;

pub use button::{ActionButton, ActionMode, ClickOutcome, SubmitOutcome};
pub use controller::FormController;
pub use error::{IntakeError, Result};
pub use field::{FieldId, FormContext};
pub use reference::StateOption;
pub use sink::{ErrorSink, NullSink, RecordingSink};
pub use store::KeyValueStore;
pub use validation::PasswordPolicy;
pub use verdict::{RuleKind, Verdict};
