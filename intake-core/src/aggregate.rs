//! The readiness gate: every validator runs exactly once per call, in
//! canonical order, with no short-circuit, so every field's message is
//! refreshed even when an earlier field already failed.

use crate::field::{FieldId, FormContext};
use crate::sink::ErrorSink;
use crate::validation::{self, PasswordPolicy};
use chrono::{Local, NaiveDate};

/// Run every field validator, render each verdict, and return true iff all
/// passed. Idempotent; holds no state between calls.
pub fn validate_all(ctx: &FormContext, policy: &PasswordPolicy, sink: &mut dyn ErrorSink) -> bool {
    validate_all_on(ctx, policy, sink, Local::now().date_naive())
}

pub fn validate_all_on(
    ctx: &FormContext,
    policy: &PasswordPolicy,
    sink: &mut dyn ErrorSink,
    today: NaiveDate,
) -> bool {
    let mut all_ok = true;
    for &field in FieldId::ALL {
        let verdict = validation::validate_field_on(ctx, field, policy, today);
        sink.render(field, &verdict);
        all_ok &= verdict.ok;
    }
    all_ok
}

/// First failing field in canonical order, the focus target after a rejected
/// click or blocked submission.
pub fn first_invalid(ctx: &FormContext, policy: &PasswordPolicy) -> Option<FieldId> {
    first_invalid_on(ctx, policy, Local::now().date_naive())
}

pub fn first_invalid_on(
    ctx: &FormContext,
    policy: &PasswordPolicy,
    today: NaiveDate,
) -> Option<FieldId> {
    FieldId::ALL
        .iter()
        .copied()
        .find(|&f| !validation::validate_field_on(ctx, f, policy, today).ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NullSink, RecordingSink};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    fn filled_context() -> FormContext {
        let mut ctx = FormContext::new();
        ctx.set(FieldId::FirstName, "Anne");
        ctx.set(FieldId::LastName, "O'Brien");
        ctx.set(FieldId::DateOfBirth, "1990-05-20");
        ctx.set(FieldId::Ssn, "123456789");
        ctx.set(FieldId::Email, "ANNE@Test.com");
        ctx.set(FieldId::Phone, "5551234567");
        ctx.set(FieldId::AddressLine1, "12 Main St");
        ctx.set(FieldId::City, "Springfield");
        ctx.set(FieldId::State, "IL");
        ctx.set(FieldId::Zip, "62704");
        ctx.set(FieldId::UserId, "abrien1");
        ctx.set(FieldId::Password, "Passw0rd!");
        ctx.set(FieldId::ConfirmPassword, "Passw0rd!");
        ctx
    }

    #[test]
    fn test_filled_form_is_ready() {
        let ctx = filled_context();
        let policy = PasswordPolicy::default();
        assert!(validate_all_on(&ctx, &policy, &mut NullSink, today()));
        assert_eq!(first_invalid_on(&ctx, &policy, today()), None);
        // The mask ran on the way in.
        assert_eq!(ctx.get(FieldId::Email), "anne@test.com");
        assert_eq!(ctx.get(FieldId::Phone), "(555) 123-4567");
    }

    #[test]
    fn test_one_failure_fails_the_whole_form() {
        let mut ctx = filled_context();
        ctx.set(FieldId::Zip, "999");
        let policy = PasswordPolicy::default();
        assert!(!validate_all_on(&ctx, &policy, &mut NullSink, today()));
        assert_eq!(
            first_invalid_on(&ctx, &policy, today()),
            Some(FieldId::Zip)
        );
    }

    #[test]
    fn test_no_short_circuit_every_message_refreshed() {
        let mut ctx = filled_context();
        ctx.set(FieldId::FirstName, ""); // first field fails immediately
        ctx.set(FieldId::Zip, "bad");
        let policy = PasswordPolicy::default();

        let mut sink = RecordingSink::new();
        assert!(!validate_all_on(&ctx, &policy, &mut sink, today()));

        // Both failures rendered, and every passing field rendered clear.
        assert!(sink.is_marked_invalid(FieldId::FirstName));
        assert!(sink.is_marked_invalid(FieldId::Zip));
        for &field in FieldId::ALL {
            assert!(sink.verdict(field).is_some(), "{field:?} not rendered");
        }
        assert!(!sink.is_marked_invalid(FieldId::City));
    }

    #[test]
    fn test_empty_form_first_invalid_is_first_field() {
        let ctx = FormContext::new();
        let policy = PasswordPolicy::default();
        assert_eq!(
            first_invalid_on(&ctx, &policy, today()),
            Some(FieldId::FirstName)
        );
    }

    #[test]
    fn test_idempotent() {
        let ctx = filled_context();
        let policy = PasswordPolicy::default();
        let first = validate_all_on(&ctx, &policy, &mut NullSink, today());
        let second = validate_all_on(&ctx, &policy, &mut NullSink, today());
        assert_eq!(first, second);
    }
}
