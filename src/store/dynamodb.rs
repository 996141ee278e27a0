//! DynamoDB-backed lock store.
//!
//! Records live in a table whose partition key is `LockID` (string); the
//! expiry is written to a numeric `Ttl` attribute. Region and credentials are
//! resolved through the standard AWS provider chain (environment, shared
//! config and credentials files, profiles, instance metadata).

use super::LockStore;
use crate::config::Config;
use crate::error::{JoppinError, Result};
use crate::locks::LockRecord;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::runtime::{Builder, Runtime};

/// Partition key attribute holding the lock name.
pub const LOCK_ID_ATTRIBUTE: &str = "LockID";

/// Numeric attribute holding the lock expiry as a Unix timestamp.
pub const TTL_ATTRIBUTE: &str = "Ttl";

/// A [`LockStore`] talking to a DynamoDB table.
///
/// The SDK is async; this store owns a current-thread runtime and blocks on
/// every request so callers stay synchronous.
#[derive(Debug)]
pub struct DynamoDbStore {
    table: String,
    client: Client,
    runtime: Runtime,
}

impl DynamoDbStore {
    /// Connect to the table named in `config`.
    ///
    /// When `dynamodb_endpoint` is set, requests go to that URL instead of the
    /// regional AWS endpoint (e.g. DynamoDB Local).
    pub fn connect(config: &Config) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| JoppinError::StoreError(format!("failed to create runtime: {}", e)))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &config.dynamodb_endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = runtime.block_on(loader.load());

        tracing::debug!(
            table = %config.dynamodb_table,
            endpoint = config.dynamodb_endpoint.as_deref().unwrap_or("default"),
            region = sdk_config.region().map(|r| r.as_ref()).unwrap_or("unset"),
            "connected to DynamoDB"
        );

        Ok(Self {
            table: config.dynamodb_table.clone(),
            client: Client::new(&sdk_config),
            runtime,
        })
    }

    /// Name of the table holding lock records.
    pub fn table(&self) -> &str {
        &self.table
    }
}

impl LockStore for DynamoDbStore {
    fn put_if_absent(&self, record: &LockRecord) -> Result<()> {
        let request = self
            .client
            .put_item()
            .table_name(&self.table)
            .item(LOCK_ID_ATTRIBUTE, AttributeValue::S(record.key.clone()))
            .item(TTL_ATTRIBUTE, AttributeValue::N(record.expiry.to_string()))
            .condition_expression("attribute_not_exists(#lock_id)")
            .expression_attribute_names("#lock_id", LOCK_ID_ATTRIBUTE);

        match self.runtime.block_on(request.send()) {
            Ok(_) => Ok(()),
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_conditional_check_failed_exception()) =>
            {
                Err(JoppinError::LockHeld(record.key.clone()))
            }
            Err(e) => Err(JoppinError::StoreError(format!(
                "PutItem on table '{}' failed: {}",
                self.table,
                DisplayErrorContext(&e)
            ))),
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        let request = self
            .client
            .delete_item()
            .table_name(&self.table)
            .key(LOCK_ID_ATTRIBUTE, AttributeValue::S(key.to_string()));

        self.runtime.block_on(request.send()).map_err(|e| {
            JoppinError::StoreError(format!(
                "DeleteItem on table '{}' failed: {}",
                self.table,
                DisplayErrorContext(&e)
            ))
        })?;

        Ok(())
    }
}
