//! Error types for the joppin CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for joppin operations.
///
/// Every variant is fatal for the current command; `main` prints the message
/// and exits with the code returned by [`JoppinError::exit_code`].
#[derive(Error, Debug)]
pub enum JoppinError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The conditional insert was rejected because a record for the key exists.
    #[error("lock '{0}' is already held")]
    LockHeld(String),

    /// The backing store failed (transport, credentials, throttling, ...).
    #[error("Lock store operation failed: {0}")]
    StoreError(String),
}

impl JoppinError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            JoppinError::UserError(_) => exit_codes::USER_ERROR,
            JoppinError::LockHeld(_) => exit_codes::LOCK_HELD,
            JoppinError::StoreError(_) => exit_codes::STORE_FAILURE,
        }
    }
}

/// Result type alias for joppin operations.
pub type Result<T> = std::result::Result<T, JoppinError>;
