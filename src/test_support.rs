use crate::config::Config;
use crate::error::{JoppinError, Result};
use crate::locks::{LockClient, LockRecord};
use crate::store::{LockStore, MemoryStore};
use std::sync::Mutex;

pub(crate) fn memory_client() -> LockClient<MemoryStore> {
    LockClient::new(MemoryStore::new())
}

pub(crate) fn test_config(key: &str, timeout: i64) -> Config {
    Config {
        dynamodb_table: "locks".to_string(),
        dynamodb_endpoint: None,
        lock_key: key.to_string(),
        lock_timeout: timeout,
    }
}

/// A store call observed by [`FaultyStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreCall {
    Put(String),
    Delete(String),
}

/// A [`MemoryStore`] wrapper that records calls and can fail on demand.
#[derive(Debug, Default)]
pub(crate) struct FaultyStore {
    pub(crate) inner: MemoryStore,
    pub(crate) fail_put: bool,
    pub(crate) fail_delete: bool,
    calls: Mutex<Vec<StoreCall>>,
}

impl FaultyStore {
    pub(crate) fn unreachable() -> Self {
        Self {
            fail_put: true,
            fail_delete: true,
            ..Self::default()
        }
    }

    pub(crate) fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LockStore for FaultyStore {
    fn put_if_absent(&self, record: &LockRecord) -> Result<()> {
        self.record(StoreCall::Put(record.key.clone()));
        if self.fail_put {
            return Err(JoppinError::StoreError("connection refused".to_string()));
        }
        self.inner.put_if_absent(record)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.record(StoreCall::Delete(key.to_string()));
        if self.fail_delete {
            return Err(JoppinError::StoreError("connection refused".to_string()));
        }
        self.inner.delete(key)
    }
}
