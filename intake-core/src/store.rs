//! Persistence seam: the controller consumes any key-value store through this
//! trait. Implementations live in `intake-store`; a missing or failing store
//! degrades to "no prior data" and never affects validation.

use crate::field::FieldId;

pub trait KeyValueStore {
    /// Current value for `key`, or None if absent (or expired/unreadable).
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    /// Set with a time-to-live in hours. Stores without expiry support keep
    /// the value indefinitely.
    fn set_with_ttl(&mut self, key: &str, value: &str, _hours: i64) {
        self.set(key, value);
    }

    fn delete(&mut self, key: &str);

    /// Drop everything (the "start over as a new user" path).
    fn clear(&mut self);
}

/// Well-known keys shared by the controller and the session glue.
pub mod keys {
    use super::FieldId;

    /// Display name remembered across visits (drives the welcome banner).
    pub const IDENTITY_FIRST_NAME: &str = "identity/first-name";

    /// Checked medical-history options, as a JSON array of labels.
    pub const MEDICAL_HISTORY: &str = "extras/medical-history";

    /// The 1-10 self-reported health slider value.
    pub const HEALTH_SCALE: &str = "extras/health-scale";

    /// Autosave slot for one form field.
    pub fn field(field: FieldId) -> String {
        format!("field/{}", field.as_str())
    }
}
