use serde::{Deserialize, Serialize};

/// Rule category a field can violate. Every field-level problem is one of
/// these; validators never raise anything else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Format,
    Range,
    Required,
    Mismatch,
}

/// Result of one field validator: pass/fail plus a fixed human-readable
/// message. Produced fresh on every call, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RuleKind>,
    pub message: String,
}

impl Verdict {
    /// A passing verdict. The empty message tells the sink to clear.
    pub fn pass() -> Self {
        Self {
            ok: true,
            kind: None,
            message: String::new(),
        }
    }

    pub fn fail(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            kind: Some(kind),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_has_empty_message() {
        let v = Verdict::pass();
        assert!(v.ok);
        assert!(v.kind.is_none());
        assert!(v.message.is_empty());
    }

    #[test]
    fn test_fail_carries_kind_and_message() {
        let v = Verdict::fail(RuleKind::Required, "Date of birth is required.");
        assert!(!v.ok);
        assert_eq!(v.kind, Some(RuleKind::Required));
        assert_eq!(v.message, "Date of birth is required.");
    }

    #[test]
    fn test_rule_kind_serialization() {
        let json = serde_json::to_string(&RuleKind::Mismatch).unwrap();
        assert_eq!(json, "\"mismatch\"");
    }
}
