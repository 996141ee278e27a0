//! Configuration for joppin.
//!
//! Settings are layered, lowest precedence first:
//! 1. Built-in defaults
//! 2. The YAML config file (`--config`, or `$HOME/.joppin.yaml` when present)
//! 3. Environment variables (`DYNAMODB_TABLE`, `DYNAMODB_ENDPOINT`, `LOCK_KEY`, `LOCK_TIMEOUT`)
//! 4. Command-line flags
//!
//! Unknown YAML fields are ignored for forward compatibility.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, ConfigOverrides};
pub use operations::{
    ENV_DYNAMODB_ENDPOINT, ENV_DYNAMODB_TABLE, ENV_LOCK_KEY, ENV_LOCK_TIMEOUT, default_config_path,
};
