use crate::verdict::{RuleKind, Verdict};
use regex::Regex;
use std::sync::LazyLock;

static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_\-]{4,19}$").unwrap());

/// Deployment-dependent password rules, kept as explicit policy rather than
/// hardcoded.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    /// When set, the password must differ from the current User ID.
    pub forbid_user_id: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            forbid_user_id: true,
        }
    }
}

/// User ID: 5-20 characters, starting with a letter, rest letters, digits,
/// underscore, or hyphen.
pub fn validate_user_id(value: &str) -> Verdict {
    if USER_ID.is_match(value.trim()) {
        Verdict::pass()
    } else {
        Verdict::fail(
            RuleKind::Format,
            "Use 5-20 characters starting with a letter; letters, digits, _ and - only.",
        )
    }
}

/// Password: at least 8 characters with an uppercase letter, a lowercase
/// letter, and a digit. Reads the User ID read-only for the must-differ
/// policy; a blank User ID never triggers it.
pub fn validate_password(value: &str, user_id: &str, policy: &PasswordPolicy) -> Verdict {
    let strong = value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit());
    if !strong {
        return Verdict::fail(
            RuleKind::Format,
            "Use 8+ characters with an uppercase letter, a lowercase letter, and a digit.",
        );
    }
    let uid = user_id.trim();
    if policy.forbid_user_id && !uid.is_empty() && value == uid {
        return Verdict::fail(
            RuleKind::Mismatch,
            "Password cannot be the same as the User ID.",
        );
    }
    Verdict::pass()
}

/// Confirmation: non-empty and equal to the password, byte for byte.
pub fn validate_confirm(value: &str, password: &str) -> Verdict {
    if !value.is_empty() && value == password {
        Verdict::pass()
    } else {
        Verdict::fail(RuleKind::Mismatch, "Passwords must match.")
    }
}
