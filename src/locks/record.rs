//! Lock record definition.

use chrono::{DateTime, Utc};

/// The stored item representing a held lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecord {
    /// Name of the critical section being protected.
    pub key: String,

    /// Absolute Unix timestamp (seconds) after which the lock is considered
    /// expired. Advisory only.
    pub expiry: i64,
}

impl LockRecord {
    /// Create a record for `key` expiring `timeout_secs` from now.
    pub fn new(key: &str, timeout_secs: i64) -> Self {
        Self::at(key, Utc::now(), timeout_secs)
    }

    /// Create a record for `key` expiring `timeout_secs` after `now`.
    pub fn at(key: &str, now: DateTime<Utc>, timeout_secs: i64) -> Self {
        Self {
            key: key.to_string(),
            expiry: now.timestamp().saturating_add(timeout_secs),
        }
    }

    /// The expiry as a UTC datetime, if it is representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expiry, 0)
    }
}

impl std::fmt::Display for LockRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expires_at() {
            Some(at) => write!(f, "{} (expires {})", self.key, at.to_rfc3339()),
            None => write!(f, "{} (expiry {})", self.key, self.expiry),
        }
    }
}
