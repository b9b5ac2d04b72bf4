use crate::error::{IntakeError, Result};
use crate::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fifteen validated inputs of the registration form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    FirstName,
    MiddleInitial,
    LastName,
    DateOfBirth,
    Ssn,
    Email,
    Phone,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Zip,
    UserId,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Canonical ordering: the order fields are validated, rendered in the
    /// review listing, and walked when hunting the first invalid field.
    pub const ALL: &'static [FieldId] = &[
        FieldId::FirstName,
        FieldId::MiddleInitial,
        FieldId::LastName,
        FieldId::DateOfBirth,
        FieldId::Ssn,
        FieldId::Email,
        FieldId::Phone,
        FieldId::AddressLine1,
        FieldId::AddressLine2,
        FieldId::City,
        FieldId::State,
        FieldId::Zip,
        FieldId::UserId,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Stable string key, used for persistence and submission files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstname",
            FieldId::MiddleInitial => "mi",
            FieldId::LastName => "lastname",
            FieldId::DateOfBirth => "dob",
            FieldId::Ssn => "ssn",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::AddressLine1 => "address1",
            FieldId::AddressLine2 => "address2",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::Zip => "zip",
            FieldId::UserId => "userid",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm",
        }
    }

    pub fn from_key(key: &str) -> Result<FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| IntakeError::UnknownField(key.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::MiddleInitial => "Middle Initial",
            FieldId::LastName => "Last Name",
            FieldId::DateOfBirth => "Date of Birth",
            FieldId::Ssn => "SSN",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::AddressLine1 => "Address 1",
            FieldId::AddressLine2 => "Address 2",
            FieldId::City => "City",
            FieldId::State => "State",
            FieldId::Zip => "ZIP",
            FieldId::UserId => "User ID",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
        }
    }

    /// Fields whose validity depends (read-only) on this one. Editing User ID
    /// re-validates Password, and editing Password re-validates the
    /// confirmation.
    pub fn dependents(&self) -> &'static [FieldId] {
        match self {
            FieldId::UserId => &[FieldId::Password],
            FieldId::Password => &[FieldId::ConfirmPassword],
            _ => &[],
        }
    }

    /// Whether this field may be written to and restored from persistence.
    /// The SSN and the credential fields never are.
    pub fn persists(&self) -> bool {
        !matches!(
            self,
            FieldId::Ssn | FieldId::Password | FieldId::ConfirmPassword
        )
    }
}

/// Explicit owner of all current field values, passed by reference into the
/// validators and the aggregator. Values are stored already-normalized:
/// `set` runs the field's mask before storing.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    values: HashMap<FieldId, String>,
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field; fields start empty.
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Normalize raw input and store it, returning the stored value.
    pub fn set(&mut self, field: FieldId, raw: &str) -> &str {
        let normalized = normalize::apply(field, raw);
        self.values.insert(field, normalized);
        self.get(field)
    }
}
