//! Backing stores for lock records.
//!
//! The lock client only needs two primitives from a store: a conditional
//! insert that fails when the key already exists, and an unconditional delete.
//! Any mutual exclusion joppin provides comes from the store's atomicity for
//! the conditional insert.

mod dynamodb;
mod memory;

pub use dynamodb::{DynamoDbStore, LOCK_ID_ATTRIBUTE, TTL_ATTRIBUTE};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::locks::LockRecord;

/// A remote keyed store that can hold lock records.
pub trait LockStore {
    /// Insert `record` only if no record exists for `record.key`.
    ///
    /// Returns `JoppinError::LockHeld` when a record already exists and
    /// `JoppinError::StoreError` for every other failure.
    fn put_if_absent(&self, record: &LockRecord) -> Result<()>;

    /// Delete the record for `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}
