//! RAII lock guard implementation.

use super::client::LockClient;
use super::record::LockRecord;
use crate::error::Result;
use crate::store::LockStore;

/// RAII guard for an acquired lock.
///
/// When dropped, the lock record is deleted from the store.
/// If deletion fails, a warning is logged but no panic occurs.
#[derive(Debug)]
pub struct LockGuard<'a, S: LockStore> {
    client: &'a LockClient<S>,

    /// The record written at acquisition.
    record: LockRecord,

    /// Whether the lock has been released manually.
    released: bool,
}

impl<'a, S: LockStore> LockGuard<'a, S> {
    pub(super) fn new(client: &'a LockClient<S>, record: LockRecord) -> Self {
        Self {
            client,
            record,
            released: false,
        }
    }

    /// Get the key this guard holds.
    pub fn key(&self) -> &str {
        &self.record.key
    }

    /// Get the record written at acquisition.
    pub fn record(&self) -> &LockRecord {
        &self.record
    }

    /// Manually release the lock.
    ///
    /// Use this instead of dropping the guard when a failed release must be
    /// reported to the caller.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.client.release(&self.record.key)
    }
}

impl<S: LockStore> Drop for LockGuard<'_, S> {
    fn drop(&mut self) {
        if !self.released
            && let Err(e) = self.client.release(&self.record.key)
        {
            tracing::warn!(key = %self.record.key, error = %e, "failed to release lock");
        }
    }
}
