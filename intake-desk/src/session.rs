//! Session glue around the core controller: welcome banner, restore,
//! autosave, the review listing, and submission bookkeeping.

use intake_core::store::keys;
use intake_core::{
    ActionMode, ClickOutcome, ErrorSink, FieldId, FormController, KeyValueStore, PasswordPolicy,
    RecordingSink, SubmitOutcome,
};

/// What greets the visitor when the page opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Welcome {
    Returning(String),
    NewUser,
}

/// One row of the review listing.
#[derive(Debug, Clone)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
    pub ok: bool,
    /// "PASS", or the failing validator's message.
    pub status: String,
}

pub struct Session<S: KeyValueStore> {
    controller: FormController,
    store: S,
    policy: PasswordPolicy,
    remember: bool,
    remember_hours: i64,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, policy: PasswordPolicy, remember: bool, remember_hours: i64) -> Self {
        Self {
            controller: FormController::new(policy),
            store,
            policy,
            remember,
            remember_hours,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn mode(&self) -> ActionMode {
        self.controller.mode()
    }

    pub fn is_valid(&self) -> bool {
        self.controller.is_valid()
    }

    pub fn welcome(&self) -> Welcome {
        match self.store.get(keys::IDENTITY_FIRST_NAME) {
            Some(name) if !name.trim().is_empty() => Welcome::Returning(name),
            _ => Welcome::NewUser,
        }
    }

    /// "Not me": drop the identity and every saved value, and reset the form.
    pub fn forget(&mut self) {
        self.store.delete(keys::IDENTITY_FIRST_NAME);
        self.store.clear();
        self.controller = FormController::new(self.policy);
    }

    /// Pre-fill saved values, but only for a recognized visitor; a fresh
    /// visitor starts from a blank form even if stale values linger.
    pub fn restore(&mut self, sink: &mut dyn ErrorSink) {
        if matches!(self.welcome(), Welcome::NewUser) {
            return;
        }
        self.controller.restore_from(&self.store, sink);
    }

    /// One user edit: runs the core path, then autosaves when remember-me is
    /// on. The SSN and credentials are never autosaved.
    pub fn edit(&mut self, field: FieldId, raw: &str, sink: &mut dyn ErrorSink) -> String {
        let stored = self.controller.on_field_changed(field, raw, sink);
        if self.remember && field.persists() {
            self.store.set(&keys::field(field), &stored);
        }
        stored
    }

    pub fn blur(&mut self, field: FieldId, sink: &mut dyn ErrorSink) {
        self.controller.on_field_blur(field, sink);
    }

    /// Checked medical-history options (unvalidated; saved for next visit).
    pub fn set_medical_history(&mut self, items: &[String]) {
        if !self.remember {
            return;
        }
        match serde_json::to_string(items) {
            Ok(json) => self.store.set(keys::MEDICAL_HISTORY, &json),
            Err(e) => tracing::error!("Failed to encode medical history: {}", e),
        }
    }

    pub fn saved_medical_history(&self) -> Vec<String> {
        self.store
            .get(keys::MEDICAL_HISTORY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn set_health_scale(&mut self, value: &str) {
        if self.remember {
            self.store.set(keys::HEALTH_SCALE, value);
        }
    }

    pub fn saved_health_scale(&self) -> Option<String> {
        self.store.get(keys::HEALTH_SCALE)
    }

    pub fn click(&mut self, sink: &mut dyn ErrorSink) -> ClickOutcome {
        self.controller.on_action_click(sink)
    }

    /// Submit guard plus persistence: a successful submission remembers the
    /// first name for the configured window, or wipes everything when
    /// remember-me is off.
    pub fn submit(&mut self, sink: &mut dyn ErrorSink) -> SubmitOutcome {
        let outcome = self.controller.on_submit(sink);
        if outcome == SubmitOutcome::Allowed {
            if self.remember {
                let first = self.controller.context().get(FieldId::FirstName).trim();
                if !first.is_empty() {
                    let first = first.to_string();
                    self.store
                        .set_with_ttl(keys::IDENTITY_FIRST_NAME, &first, self.remember_hours);
                }
            } else {
                self.store.clear();
            }
        }
        outcome
    }

    /// The PASS/ERROR listing shown when the visitor asks to review.
    pub fn review(&self) -> Vec<ReviewRow> {
        let mut sink = RecordingSink::new();
        self.controller.render_all(&mut sink);

        FieldId::ALL
            .iter()
            .map(|&field| {
                // render_all has rendered every field by this point.
                let verdict = sink
                    .verdict(field)
                    .cloned()
                    .unwrap_or_else(intake_core::Verdict::pass);
                ReviewRow {
                    label: field.label(),
                    value: display_value(self.controller.context().get(field), field),
                    ok: verdict.ok,
                    status: if verdict.ok {
                        "PASS".to_string()
                    } else {
                        verdict.message
                    },
                }
            })
            .collect()
    }
}

fn display_value(value: &str, field: FieldId) -> String {
    match field {
        FieldId::Password | FieldId::ConfirmPassword => "(hidden)".to_string(),
        FieldId::Ssn => ssn_pretty(value),
        FieldId::MiddleInitial | FieldId::AddressLine2 if value.trim().is_empty() => {
            "(blank)".to_string()
        }
        _ if value.trim().is_empty() => "(none)".to_string(),
        _ => value.trim().to_string(),
    }
}

/// `DDD-DD-DDDD` for a clean 9-digit SSN, a placeholder otherwise.
fn ssn_pretty(digits: &str) -> String {
    if digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}-{}", &digits[..3], &digits[3..5], &digits[5..])
    } else {
        "(invalid)".to_string()
    }
}
