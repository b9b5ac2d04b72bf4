//! Single entry point tying the pieces together: every edit runs
//! normalization, the relevant validators, and the button-mode transition in
//! that fixed order.

use crate::aggregate;
use crate::button::{ActionButton, ActionMode, ClickOutcome, SubmitOutcome};
use crate::field::{FieldId, FormContext};
use crate::sink::{ErrorSink, NullSink};
use crate::store::{keys, KeyValueStore};
use crate::validation::{self, PasswordPolicy};
use chrono::{Local, NaiveDate};

pub struct FormController {
    ctx: FormContext,
    button: ActionButton,
    policy: PasswordPolicy,
}

impl FormController {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            ctx: FormContext::new(),
            button: ActionButton::new(),
            policy,
        }
    }

    pub fn context(&self) -> &FormContext {
        &self.ctx
    }

    pub fn mode(&self) -> ActionMode {
        self.button.mode()
    }

    /// One keystroke (or one restored value): normalize and store, validate
    /// the field plus its read-only dependents, render the verdicts, then
    /// tell the button the world changed. Returns the stored value.
    pub fn on_field_changed(
        &mut self,
        field: FieldId,
        raw: &str,
        sink: &mut dyn ErrorSink,
    ) -> String {
        self.on_field_changed_on(field, raw, sink, Local::now().date_naive())
    }

    pub fn on_field_changed_on(
        &mut self,
        field: FieldId,
        raw: &str,
        sink: &mut dyn ErrorSink,
        today: NaiveDate,
    ) -> String {
        let stored = self.ctx.set(field, raw).to_string();

        let verdict = validation::validate_field_on(&self.ctx, field, &self.policy, today);
        sink.render(field, &verdict);
        for &dep in field.dependents() {
            let verdict = validation::validate_field_on(&self.ctx, dep, &self.policy, today);
            sink.render(dep, &verdict);
        }

        self.button.on_field_edited();
        stored
    }

    /// Leaving a field re-runs the same path on the value already stored, so
    /// the message persists without any synthetic-event indirection.
    pub fn on_field_blur(&mut self, field: FieldId, sink: &mut dyn ErrorSink) {
        let raw = self.ctx.get(field).to_string();
        self.on_field_changed(field, &raw, sink);
    }

    pub fn on_action_click(&mut self, sink: &mut dyn ErrorSink) -> ClickOutcome {
        self.button.on_click(&self.ctx, &self.policy, sink)
    }

    pub fn on_action_click_on(
        &mut self,
        sink: &mut dyn ErrorSink,
        today: NaiveDate,
    ) -> ClickOutcome {
        self.button.on_click_on(&self.ctx, &self.policy, sink, today)
    }

    /// Guard for submissions not initiated through the button.
    pub fn on_submit(&mut self, sink: &mut dyn ErrorSink) -> SubmitOutcome {
        self.button.on_submit(&self.ctx, &self.policy, sink)
    }

    /// The one boolean query the host gets: is the form currently valid?
    /// Renders nothing.
    pub fn is_valid(&self) -> bool {
        aggregate::validate_all(&self.ctx, &self.policy, &mut NullSink)
    }

    /// The one imperative action: render every current verdict to the sink.
    pub fn render_all(&self, sink: &mut dyn ErrorSink) -> bool {
        aggregate::validate_all(&self.ctx, &self.policy, sink)
    }

    pub fn first_invalid(&self) -> Option<FieldId> {
        aggregate::first_invalid(&self.ctx, &self.policy)
    }

    /// Pre-fill saved values before the user's first edit, through the exact
    /// path manual entry takes, so masks run and verdicts render. The SSN and
    /// credential fields are never restored.
    pub fn restore_from(&mut self, store: &dyn KeyValueStore, sink: &mut dyn ErrorSink) {
        for &field in FieldId::ALL {
            if !field.persists() {
                continue;
            }
            if let Some(saved) = store.get(&keys::field(field)) {
                self.on_field_changed(field, &saved, sink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use std::collections::HashMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    /// Minimal store for restore tests; the real ones live in intake-store.
    #[derive(Default)]
    struct MapStore(HashMap<String, String>);

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
        fn delete(&mut self, key: &str) {
            self.0.remove(key);
        }
        fn clear(&mut self) {
            self.0.clear();
        }
    }

    fn fill_valid(c: &mut FormController, sink: &mut dyn ErrorSink) {
        let entries = [
            (FieldId::FirstName, "Anne"),
            (FieldId::LastName, "O'Brien"),
            (FieldId::DateOfBirth, "1990-05-20"),
            (FieldId::Ssn, "123456789"),
            (FieldId::Email, "ANNE@Test.com"),
            (FieldId::Phone, "5551234567"),
            (FieldId::AddressLine1, "12 Main St"),
            (FieldId::City, "Springfield"),
            (FieldId::State, "IL"),
            (FieldId::Zip, "62704"),
            (FieldId::UserId, "abrien1"),
            (FieldId::Password, "Passw0rd!"),
            (FieldId::ConfirmPassword, "Passw0rd!"),
        ];
        for (field, raw) in entries {
            c.on_field_changed_on(field, raw, sink, today());
        }
    }

    #[test]
    fn test_registration_scenario_end_to_end() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();

        fill_valid(&mut controller, &mut sink);

        assert_eq!(controller.context().get(FieldId::Email), "anne@test.com");
        assert_eq!(
            controller.context().get(FieldId::Phone),
            "(555) 123-4567"
        );
        assert!(controller.is_valid());

        let outcome = controller.on_action_click_on(&mut sink, today());
        assert_eq!(outcome, ClickOutcome::Armed);
        assert_eq!(controller.mode(), ActionMode::Submit);
    }

    #[test]
    fn test_edit_reverts_armed_button() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();
        fill_valid(&mut controller, &mut sink);
        controller.on_action_click_on(&mut sink, today());
        assert_eq!(controller.mode(), ActionMode::Submit);

        // Even an edit that keeps the field valid makes the pass stale.
        controller.on_field_changed_on(FieldId::City, "Chatham", &mut sink, today());
        assert_eq!(controller.mode(), ActionMode::Review);
    }

    #[test]
    fn test_typing_renders_incremental_verdicts() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();

        controller.on_field_changed_on(FieldId::Zip, "627", &mut sink, today());
        assert!(sink.is_marked_invalid(FieldId::Zip));

        controller.on_field_changed_on(FieldId::Zip, "62704", &mut sink, today());
        assert!(!sink.is_marked_invalid(FieldId::Zip));
    }

    #[test]
    fn test_user_id_edit_revalidates_password() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();

        controller.on_field_changed_on(FieldId::Password, "Abrien12", &mut sink, today());
        assert!(!sink.is_marked_invalid(FieldId::Password));

        // Making the User ID equal to the password trips the policy on the
        // password field, from a User ID edit.
        controller.on_field_changed_on(FieldId::UserId, "Abrien12", &mut sink, today());
        assert!(sink.is_marked_invalid(FieldId::Password));
    }

    #[test]
    fn test_password_edit_revalidates_confirm() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();

        controller.on_field_changed_on(FieldId::Password, "Passw0rd!", &mut sink, today());
        controller.on_field_changed_on(FieldId::ConfirmPassword, "Passw0rd!", &mut sink, today());
        assert!(!sink.is_marked_invalid(FieldId::ConfirmPassword));

        controller.on_field_changed_on(FieldId::Password, "Passw0rd!!", &mut sink, today());
        assert!(sink.is_marked_invalid(FieldId::ConfirmPassword));
    }

    #[test]
    fn test_blur_persists_message_without_changing_value() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();

        controller.on_field_changed_on(FieldId::Email, "Broken", &mut sink, today());
        controller.on_field_blur(FieldId::Email, &mut sink);
        assert_eq!(controller.context().get(FieldId::Email), "broken");
        assert!(sink.is_marked_invalid(FieldId::Email));
    }

    #[test]
    fn test_restore_runs_masks_and_validation() {
        let mut store = MapStore::default();
        store.set("field/phone", "5551234567");
        store.set("field/email", "Anne@Test.com");
        store.set("field/ssn", "123456789"); // ignored: never persisted
        store.set("field/password", "ShouldNeverLoad1"); // ignored: never persisted

        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();
        controller.restore_from(&store, &mut sink);

        assert_eq!(
            controller.context().get(FieldId::Phone),
            "(555) 123-4567"
        );
        assert_eq!(controller.context().get(FieldId::Email), "anne@test.com");
        assert_eq!(controller.context().get(FieldId::Ssn), "");
        assert_eq!(controller.context().get(FieldId::Password), "");
        assert!(!sink.is_marked_invalid(FieldId::Phone));
    }

    #[test]
    fn test_submit_guard_blocks_and_reports_focus_target() {
        let mut controller = FormController::new(PasswordPolicy::default());
        let mut sink = RecordingSink::new();
        let outcome = controller.on_submit(&mut sink);
        assert!(matches!(
            outcome,
            SubmitOutcome::Blocked {
                first_invalid: Some(FieldId::FirstName)
            }
        ));
        assert_eq!(controller.mode(), ActionMode::Review);
    }
}
