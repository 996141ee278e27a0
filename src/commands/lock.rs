//! `lock` and `unlock` command implementations.

use crate::config::Config;
use crate::error::Result;
use crate::locks::LockClient;
use crate::store::LockStore;

/// Acquire the configured lock and leave it held.
pub fn cmd_lock<S: LockStore>(config: &Config, client: &LockClient<S>) -> Result<()> {
    tracing::debug!(key = %config.lock_key, timeout = config.lock_timeout, "lock called");

    let record = client.acquire(&config.lock_key, config.lock_timeout)?;
    println!("Acquired lock {}", record);
    Ok(())
}

/// Release the configured lock, whoever holds it.
pub fn cmd_unlock<S: LockStore>(config: &Config, client: &LockClient<S>) -> Result<()> {
    tracing::debug!(key = %config.lock_key, "unlock called");

    client.release(&config.lock_key)?;
    println!("Released lock {}", config.lock_key);
    Ok(())
}
