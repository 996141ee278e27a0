//! Config struct definition.

use serde::{Deserialize, Serialize};

/// Resolved configuration for a joppin invocation.
///
/// This struct mirrors the YAML config file. Every field is optional in the
/// file; missing fields take their `Default` value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Store settings
    // =========================================================================
    /// Name of the DynamoDB table holding lock records (required).
    pub dynamodb_table: String,

    /// Endpoint URL override, e.g. `http://localhost:8000` for DynamoDB Local.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamodb_endpoint: Option<String>,

    // =========================================================================
    // Lock settings
    // =========================================================================
    /// Name of the lock to take. Passed to the store as-is.
    pub lock_key: String,

    /// Seconds added to the current time to compute the stored expiry.
    pub lock_timeout: i64,
}

/// Values given on the command line, applied over file and environment settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub dynamodb_table: Option<String>,
    pub dynamodb_endpoint: Option<String>,
    pub lock_key: Option<String>,
    pub lock_timeout: Option<i64>,
}
