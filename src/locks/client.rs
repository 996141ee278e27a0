//! Lock acquisition and release against a [`LockStore`].

use super::guard::LockGuard;
use super::record::LockRecord;
use crate::error::Result;
use crate::store::LockStore;

/// Acquires and releases named locks in a backing store.
///
/// Every operation is a single store call. There is no retry, no waiting for
/// a held lock to be released, and no renewal.
#[derive(Debug)]
pub struct LockClient<S> {
    store: S,
}

impl<S: LockStore> LockClient<S> {
    /// Create a client over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Acquire the lock for `key`.
    ///
    /// Writes a record expiring `timeout_secs` from now, on the condition that
    /// no record for `key` exists yet. The expiry is never consulted later; an
    /// old lock stays held until someone releases it.
    ///
    /// # Returns
    ///
    /// * `Ok(LockRecord)` - The record that was written
    /// * `Err(JoppinError::LockHeld)` - A record for `key` already exists
    /// * `Err(JoppinError::StoreError)` - The store could not be reached or refused the write
    pub fn acquire(&self, key: &str, timeout_secs: i64) -> Result<LockRecord> {
        let record = LockRecord::new(key, timeout_secs);
        self.store.put_if_absent(&record)?;
        tracing::info!(key = %record.key, expiry = record.expiry, "lock acquired");
        Ok(record)
    }

    /// Release the lock for `key`.
    ///
    /// The delete is unconditional: it does not check that this process (or
    /// anyone) acquired the lock, so any caller knowing the key can release
    /// it. Releasing a key that is not locked succeeds.
    pub fn release(&self, key: &str) -> Result<()> {
        self.store.delete(key)?;
        tracing::info!(key, "lock released");
        Ok(())
    }

    /// Acquire the lock for `key` and return a guard that releases it on drop.
    pub fn lock(&self, key: &str, timeout_secs: i64) -> Result<LockGuard<'_, S>> {
        let record = self.acquire(key, timeout_secs)?;
        Ok(LockGuard::new(self, record))
    }
}
