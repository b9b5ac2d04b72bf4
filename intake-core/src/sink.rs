use crate::field::FieldId;
use crate::verdict::Verdict;
use std::collections::HashMap;

/// Where verdicts go to be shown. The host renders the message next to the
/// field and marks it invalid; a passing verdict (empty message) means clear
/// the slot and mark the field valid.
pub trait ErrorSink {
    fn render(&mut self, field: FieldId, verdict: &Verdict);
}

/// Discards everything. Used where only the boolean answer matters.
pub struct NullSink;

impl ErrorSink for NullSink {
    fn render(&mut self, _field: FieldId, _verdict: &Verdict) {}
}

/// Keeps the latest verdict per field. Backs the review listing and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    verdicts: HashMap<FieldId, Verdict>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest verdict rendered for `field`, if any.
    pub fn verdict(&self, field: FieldId) -> Option<&Verdict> {
        self.verdicts.get(&field)
    }

    /// Message currently shown for `field`; empty if clear or never rendered.
    pub fn message(&self, field: FieldId) -> &str {
        self.verdicts
            .get(&field)
            .map(|v| v.message.as_str())
            .unwrap_or("")
    }

    pub fn is_marked_invalid(&self, field: FieldId) -> bool {
        self.verdicts.get(&field).is_some_and(|v| !v.ok)
    }
}

impl ErrorSink for RecordingSink {
    fn render(&mut self, field: FieldId, verdict: &Verdict) {
        self.verdicts.insert(field, verdict.clone());
    }
}
