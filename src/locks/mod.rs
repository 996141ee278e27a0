//! Distributed locking for joppin.
//!
//! A lock is a single record in a remote store, keyed by the lock name:
//! - Acquiring inserts the record with **create-if-absent** semantics, so only
//!   one caller can hold a given key at a time.
//! - Releasing deletes the record unconditionally.
//!
//! # Lock Records
//!
//! Each record carries:
//! - `key`: the lock name
//! - `expiry`: Unix timestamp computed as `now + timeout` at acquisition
//!
//! The expiry is written for the benefit of operators and store-side TTL
//! features. joppin never reads it back and never takes over an old lock.
//!
//! # RAII Guards
//!
//! [`LockClient::lock`] returns a guard that releases the lock when dropped.
//! If deletion fails during drop, a warning is logged but the program does
//! not crash; use [`LockGuard::release`] to handle the error explicitly.

mod client;
mod guard;
mod record;


// Re-export public API
pub use client::LockClient;
pub use guard::LockGuard;
pub use record::LockRecord;
