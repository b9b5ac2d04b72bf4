//! Field validators: one pure predicate per field, producing a [`Verdict`].
//!
//! Validators read already-normalized values out of the [`FormContext`] and
//! never write anything back; rendering a verdict is the caller's job.
//! Split by concern: identity (names, DOB, SSN), contact (email, phone,
//! address), credentials (user id, password).

pub mod contact;
pub mod credentials;
pub mod identity;

pub use credentials::PasswordPolicy;

use crate::field::{FieldId, FormContext};
use crate::verdict::Verdict;
use chrono::{Local, NaiveDate};

/// Validate one field against today's date.
pub fn validate_field(ctx: &FormContext, field: FieldId, policy: &PasswordPolicy) -> Verdict {
    validate_field_on(ctx, field, policy, Local::now().date_naive())
}

/// Clock-free variant: the date-of-birth window is computed from `today`.
pub fn validate_field_on(
    ctx: &FormContext,
    field: FieldId,
    policy: &PasswordPolicy,
    today: NaiveDate,
) -> Verdict {
    match field {
        FieldId::FirstName => identity::validate_name(ctx.get(field)),
        FieldId::MiddleInitial => identity::validate_middle_initial(ctx.get(field)),
        FieldId::LastName => identity::validate_name(ctx.get(field)),
        FieldId::DateOfBirth => identity::validate_dob(ctx.get(field), today),
        FieldId::Ssn => identity::validate_ssn(ctx.get(field)),
        FieldId::Email => contact::validate_email(ctx.get(field)),
        FieldId::Phone => contact::validate_phone(ctx.get(field)),
        FieldId::AddressLine1 => contact::validate_address_line(ctx.get(field), false),
        FieldId::AddressLine2 => contact::validate_address_line(ctx.get(field), true),
        FieldId::City => contact::validate_city(ctx.get(field)),
        FieldId::State => contact::validate_state(ctx.get(field)),
        FieldId::Zip => contact::validate_zip(ctx.get(field)),
        FieldId::UserId => credentials::validate_user_id(ctx.get(field)),
        FieldId::Password => {
            credentials::validate_password(ctx.get(field), ctx.get(FieldId::UserId), policy)
        }
        FieldId::ConfirmPassword => {
            credentials::validate_confirm(ctx.get(field), ctx.get(FieldId::Password))
        }
    }
}
