//! The two-stage Review → Submit button.
//!
//! Mode is the only persisted state in the core. A pass is only trusted for
//! as long as no field changes underneath it: any edit reverts Submit back
//! to Review before the next click is processed.

use crate::aggregate;
use crate::field::{FieldId, FormContext};
use crate::sink::ErrorSink;
use crate::validation::PasswordPolicy;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    Review,
    Submit,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// All validators passed; the button is now armed for submission.
    Armed,
    /// At least one validator failed; focus should move to the named field.
    Rejected { first_invalid: Option<FieldId> },
    /// Clicked while armed: the native submission may proceed untouched.
    Proceed,
}

/// What the submit-event guard decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Allowed,
    /// Submission must be cancelled; the button has been forced to Review.
    Blocked { first_invalid: Option<FieldId> },
}

#[derive(Debug, Clone)]
pub struct ActionButton {
    mode: ActionMode,
}

impl Default for ActionButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionButton {
    pub fn new() -> Self {
        Self {
            mode: ActionMode::Review,
        }
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    pub fn on_click(
        &mut self,
        ctx: &FormContext,
        policy: &PasswordPolicy,
        sink: &mut dyn ErrorSink,
    ) -> ClickOutcome {
        self.on_click_on(ctx, policy, sink, Local::now().date_naive())
    }

    pub fn on_click_on(
        &mut self,
        ctx: &FormContext,
        policy: &PasswordPolicy,
        sink: &mut dyn ErrorSink,
        today: NaiveDate,
    ) -> ClickOutcome {
        if self.mode == ActionMode::Submit {
            return ClickOutcome::Proceed;
        }
        if aggregate::validate_all_on(ctx, policy, sink, today) {
            self.mode = ActionMode::Submit;
            ClickOutcome::Armed
        } else {
            self.mode = ActionMode::Review;
            ClickOutcome::Rejected {
                first_invalid: aggregate::first_invalid_on(ctx, policy, today),
            }
        }
    }

    /// Any field edit makes a prior pass stale.
    pub fn on_field_edited(&mut self) {
        if self.mode == ActionMode::Submit {
            self.mode = ActionMode::Review;
        }
    }

    /// Guard for submissions triggered by means other than the button
    /// (Enter key and friends): re-validate, and on failure cancel and fall
    /// back to Review.
    pub fn on_submit(
        &mut self,
        ctx: &FormContext,
        policy: &PasswordPolicy,
        sink: &mut dyn ErrorSink,
    ) -> SubmitOutcome {
        self.on_submit_on(ctx, policy, sink, Local::now().date_naive())
    }

    pub fn on_submit_on(
        &mut self,
        ctx: &FormContext,
        policy: &PasswordPolicy,
        sink: &mut dyn ErrorSink,
        today: NaiveDate,
    ) -> SubmitOutcome {
        if aggregate::validate_all_on(ctx, policy, sink, today) {
            SubmitOutcome::Allowed
        } else {
            self.mode = ActionMode::Review;
            SubmitOutcome::Blocked {
                first_invalid: aggregate::first_invalid_on(ctx, policy, today),
            }
        }
    }
}
