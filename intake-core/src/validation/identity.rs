use crate::verdict::{RuleKind, Verdict};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z'\-]{1,30}$").unwrap());
static MIDDLE_INITIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]$").unwrap());
static SSN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").unwrap());

/// First/last name: 1-30 characters, letters/apostrophes/hyphens only.
pub fn validate_name(value: &str) -> Verdict {
    if NAME.is_match(value.trim()) {
        Verdict::pass()
    } else {
        Verdict::fail(
            RuleKind::Format,
            "Use 1-30 letters, apostrophes, or hyphens.",
        )
    }
}

/// Middle initial: blank, or exactly one letter.
pub fn validate_middle_initial(value: &str) -> Verdict {
    let v = value.trim();
    if v.is_empty() || MIDDLE_INITIAL.is_match(v) {
        Verdict::pass()
    } else {
        Verdict::fail(RuleKind::Format, "Leave blank or enter a single letter.")
    }
}

/// Date of birth: required, a real `YYYY-MM-DD` date, not in the future, and
/// not more than 120 years before `today`. The 120-year boundary itself is
/// accepted.
pub fn validate_dob(value: &str, today: NaiveDate) -> Verdict {
    let v = value.trim();
    if v.is_empty() {
        return Verdict::fail(RuleKind::Required, "Date of birth is required.");
    }
    let Ok(dob) = NaiveDate::parse_from_str(v, "%Y-%m-%d") else {
        return Verdict::fail(RuleKind::Format, "Enter a valid date (YYYY-MM-DD).");
    };
    if dob > today {
        return Verdict::fail(RuleKind::Range, "Date of birth cannot be in the future.");
    }
    if dob < oldest_allowed(today) {
        return Verdict::fail(
            RuleKind::Range,
            "Date of birth cannot be more than 120 years ago.",
        );
    }
    Verdict::pass()
}

/// 120 years before `today`. When today is Feb 29 of a leap year whose
/// -120 counterpart is not a leap year, the boundary moves to Feb 28.
fn oldest_allowed(today: NaiveDate) -> NaiveDate {
    use chrono::Datelike;
    let year = today.year() - 120;
    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(today)
}

/// SSN: exactly nine digits once non-digits are stripped. Stripping here as
/// well as in the mask keeps the check correct for raw, never-masked input.
pub fn validate_ssn(value: &str) -> Verdict {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if SSN.is_match(&digits) {
        Verdict::pass()
    } else {
        Verdict::fail(RuleKind::Format, "Enter exactly 9 digits.")
    }
}
