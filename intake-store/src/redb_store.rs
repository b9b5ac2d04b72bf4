//! Durable key-value persistence for remembered identity and autosaved form
//! values.
//!
//! Each entry is a small JSON envelope so the identity record can carry a
//! cookie-style time-to-live; ordinary autosave entries have no expiry.
//! Expired entries read as absent and are purged on sight.

use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use intake_core::KeyValueStore;
use redb::{Database, TableDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENTRIES: TableDefinition<&str, &str> = TableDefinition::new("entries");

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

impl Envelope {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// redb-backed store. All failures are surfaced on the fallible `try_*`
/// methods; the [`KeyValueStore`] impl degrades them to absent/no-op with a
/// log line, since persistence must never break validation.
pub struct RedbStore {
    db: Database,
}

#[allow(clippy::result_large_err)]
impl RedbStore {
    /// Open the store (create if not exists).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ENTRIES)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    pub fn try_get(&self, key: &str) -> Result<Option<String>> {
        let envelope = {
            let read_txn = self.db.begin_read()?;
            let table = read_txn.open_table(ENTRIES)?;
            match table.get(key)? {
                Some(raw) => serde_json::from_str::<Envelope>(raw.value())?,
                None => return Ok(None),
            }
        };

        if envelope.is_expired(Utc::now()) {
            self.try_delete(key)?;
            return Ok(None);
        }
        Ok(Some(envelope.value))
    }

    pub fn try_set(&self, key: &str, value: &str) -> Result<()> {
        self.write_envelope(key, value, None)
    }

    /// Set with a time-to-live in hours, after which the entry reads as
    /// absent.
    pub fn try_set_with_ttl(&self, key: &str, value: &str, hours: i64) -> Result<()> {
        self.write_envelope(key, value, Some(Utc::now() + Duration::hours(hours)))
    }

    pub fn try_delete(&self, key: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ENTRIES)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove every entry (the "start over" path).
    pub fn try_clear(&self) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ENTRIES)?;
            table.retain(|_, _| false)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn write_envelope(
        &self,
        key: &str,
        value: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let envelope = Envelope {
            value: value.to_string(),
            expires_at,
        };
        let raw = serde_json::to_string(&envelope)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ENTRIES)?;
            table.insert(key, raw.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Store read failed for {:?}: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value) {
            tracing::error!("Store write failed for {:?}: {}", key, e);
        }
    }

    fn set_with_ttl(&mut self, key: &str, value: &str, hours: i64) {
        if let Err(e) = self.try_set_with_ttl(key, value, hours) {
            tracing::error!("Store write failed for {:?}: {}", key, e);
        }
    }

    fn delete(&mut self, key: &str) {
        if let Err(e) = self.try_delete(key) {
            tracing::error!("Store delete failed for {:?}: {}", key, e);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            tracing::error!("Store clear failed: {}", e);
        }
    }
}
