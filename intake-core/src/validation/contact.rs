use crate::verdict::{RuleKind, Verdict};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").unwrap());
static CITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z.\- ]{2,30}$").unwrap());
static ZIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());

/// Email: `local@domain.tld` shape with no whitespace and a TLD of at least
/// two letters. The value arrives already lowercased by the mask.
pub fn validate_email(value: &str) -> Verdict {
    if EMAIL.is_match(value.trim()) {
        Verdict::pass()
    } else {
        Verdict::fail(
            RuleKind::Format,
            "Use a valid email like name@domain.tld.",
        )
    }
}

/// Phone: must match the literal masked form `(DDD) DDD-DDDD`.
pub fn validate_phone(value: &str) -> Verdict {
    if PHONE.is_match(value) {
        Verdict::pass()
    } else {
        Verdict::fail(RuleKind::Format, "Format must be (123) 456-7890.")
    }
}

/// Street address: 2-30 characters of any content; line 2 may be blank.
pub fn validate_address_line(value: &str, optional: bool) -> Verdict {
    let v = value.trim();
    if optional && v.is_empty() {
        return Verdict::pass();
    }
    let len = v.chars().count();
    if (2..=30).contains(&len) {
        Verdict::pass()
    } else if optional {
        Verdict::fail(RuleKind::Range, "Use 2-30 characters or leave blank.")
    } else {
        Verdict::fail(RuleKind::Range, "Use 2-30 characters.")
    }
}

/// City: 2-30 of letters, spaces, periods, hyphens.
pub fn validate_city(value: &str) -> Verdict {
    if CITY.is_match(value.trim()) {
        Verdict::pass()
    } else {
        Verdict::fail(
            RuleKind::Format,
            "Use 2-30 letters, spaces, periods, or hyphens.",
        )
    }
}

/// State: any non-empty selection. The option list may still be loading (or
/// may never arrive); nothing beyond non-emptiness is assumed.
pub fn validate_state(value: &str) -> Verdict {
    if value.trim().is_empty() {
        Verdict::fail(RuleKind::Required, "Please select a state.")
    } else {
        Verdict::pass()
    }
}

/// ZIP: five digits, optionally `-` plus four more (ZIP+4).
pub fn validate_zip(value: &str) -> Verdict {
    if ZIP.is_match(value.trim()) {
        Verdict::pass()
    } else {
        Verdict::fail(
            RuleKind::Format,
            "Use 5 digits, optionally followed by a dash and 4 more.",
        )
    }
}
