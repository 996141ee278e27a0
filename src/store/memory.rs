//! In-process lock store.

use super::LockStore;
use crate::error::{JoppinError, Result};
use crate::locks::LockRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// A lock store kept in memory.
///
/// Clones share the same records, so several clients (or threads) built from
/// clones of one `MemoryStore` contend for the same keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, LockRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<LockRecord> {
        self.records().get(key).cloned()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn records(&self) -> MutexGuard<'_, HashMap<String, LockRecord>> {
        // A panic while holding the mutex cannot leave the map half-written.
        self.records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl LockStore for MemoryStore {
    fn put_if_absent(&self, record: &LockRecord) -> Result<()> {
        let mut records = self.records();
        if records.contains_key(&record.key) {
            return Err(JoppinError::LockHeld(record.key.clone()));
        }
        records.insert(record.key.clone(), record.clone());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.records().remove(key);
        Ok(())
    }
}
