//! Per-field input masks, applied on every edit before any validator runs.
//!
//! All transforms are pure, infallible, and idempotent: a lone `(` or a
//! half-typed number is a valid intermediate state, not an error.

use crate::field::FieldId;

/// SSN mask: digits only, at most nine.
pub fn ssn(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(9).collect()
}

/// Phone mask: `(DDD) DDD-DDDD`, built up progressively as digits accumulate.
/// Masking an already-masked value is a no-op.
pub fn phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(10).collect();
    let mut out = String::with_capacity(14);
    if !digits.is_empty() {
        out.push('(');
        out.extend(&digits[..digits.len().min(3)]);
    }
    if digits.len() >= 4 {
        out.push_str(") ");
        out.extend(&digits[3..digits.len().min(6)]);
    }
    if digits.len() >= 7 {
        out.push('-');
        out.extend(&digits[6..]);
    }
    out
}

/// Email mask: the whole value is lowercased on every edit.
pub fn email(raw: &str) -> String {
    raw.to_lowercase()
}

/// Apply the mask for `field`; fields without one pass through unchanged.
pub fn apply(field: FieldId, raw: &str) -> String {
    match field {
        FieldId::Ssn => ssn(raw),
        FieldId::Phone => phone(raw),
        FieldId::Email => email(raw),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssn_strips_and_truncates() {
        assert_eq!(ssn("123-45-6789"), "123456789");
        assert_eq!(ssn("1234567890123"), "123456789");
        assert_eq!(ssn("abc"), "");
        assert_eq!(ssn(""), "");
    }

    #[test]
    fn test_ssn_idempotent() {
        let once = ssn("12a3-45-6789");
        assert_eq!(ssn(&once), once);
    }

    #[test]
    fn test_phone_progressive_mask() {
        assert_eq!(phone(""), "");
        assert_eq!(phone("5"), "(5");
        assert_eq!(phone("555"), "(555");
        assert_eq!(phone("5551"), "(555) 1");
        assert_eq!(phone("555123"), "(555) 123");
        assert_eq!(phone("5551234"), "(555) 123-4");
        assert_eq!(phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_phone_strips_junk_and_truncates() {
        assert_eq!(phone("(555) 123-4567"), "(555) 123-4567");
        assert_eq!(phone("555-123-4567 ext 9"), "(555) 123-4567");
        assert_eq!(phone("++55x5"), "(555");
    }

    #[test]
    fn test_phone_idempotent_for_all_lengths() {
        for len in 0..=12 {
            let raw: String = "5551234567890"[..len].to_string();
            let once = phone(&raw);
            assert_eq!(phone(&once), once, "not stable for {:?}", raw);
        }
    }

    #[test]
    fn test_email_lowercases() {
        assert_eq!(email("Anne@Test.COM"), "anne@test.com");
        assert_eq!(email("already@low.er"), "already@low.er");
    }

    #[test]
    fn test_apply_identity_for_unmasked_fields() {
        assert_eq!(apply(FieldId::City, " Springfield "), " Springfield ");
        assert_eq!(apply(FieldId::Phone, "5551234567"), "(555) 123-4567");
    }
}
