//! Config loading, layering, and validation.

use super::model::{Config, ConfigOverrides};
use crate::error::{JoppinError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding `dynamodb_table`.
pub const ENV_DYNAMODB_TABLE: &str = "DYNAMODB_TABLE";

/// Environment variable overriding `dynamodb_endpoint`.
pub const ENV_DYNAMODB_ENDPOINT: &str = "DYNAMODB_ENDPOINT";

/// Environment variable overriding `lock_key`.
pub const ENV_LOCK_KEY: &str = "LOCK_KEY";

/// Environment variable overriding `lock_timeout`.
pub const ENV_LOCK_TIMEOUT: &str = "LOCK_TIMEOUT";

const CONFIG_FILE_NAME: &str = ".joppin.yaml";

/// Default config file location: `$HOME/.joppin.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    config_path_in_home(|name| std::env::var(name).ok())
}

fn config_path_in_home<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully parsed config (not yet validated)
    /// * `Err(JoppinError::UserError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            JoppinError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            JoppinError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| JoppinError::UserError(format!("failed to parse config YAML: {}", e)))
    }

    /// Build the effective configuration from the process environment.
    ///
    /// When `config_path` is `None`, `$HOME/.joppin.yaml` is read if it exists
    /// and skipped otherwise. An explicit path must be readable.
    pub fn resolve(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(config_path, overrides, |name| std::env::var(name).ok())
    }

    /// Like [`Config::resolve`], reading environment variables through `lookup`.
    pub fn resolve_with<F>(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => match config_path_in_home(&lookup) {
                Some(path) if path.is_file() => {
                    tracing::debug!(path = %path.display(), "using default config file");
                    Self::load(&path)?
                }
                _ => Self::default(),
            },
        };

        config.apply_env_with(&lookup)?;
        config.apply_overrides(overrides);
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides read through `lookup`.
    ///
    /// Empty variables are treated as unset.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(table) = get(ENV_DYNAMODB_TABLE) {
            self.dynamodb_table = table;
        }
        if let Some(endpoint) = get(ENV_DYNAMODB_ENDPOINT) {
            self.dynamodb_endpoint = Some(endpoint);
        }
        if let Some(key) = get(ENV_LOCK_KEY) {
            self.lock_key = key;
        }
        if let Some(timeout) = get(ENV_LOCK_TIMEOUT) {
            self.lock_timeout = timeout.trim().parse().map_err(|_| {
                JoppinError::UserError(format!(
                    "{} must be an integer number of seconds (found '{}')",
                    ENV_LOCK_TIMEOUT, timeout
                ))
            })?;
        }

        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(table) = &overrides.dynamodb_table {
            self.dynamodb_table = table.clone();
        }
        if let Some(endpoint) = &overrides.dynamodb_endpoint {
            self.dynamodb_endpoint = Some(endpoint.clone());
        }
        if let Some(key) = &overrides.lock_key {
            self.lock_key = key.clone();
        }
        if let Some(timeout) = overrides.lock_timeout {
            self.lock_timeout = timeout;
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Only the table name is required. The lock key is passed to the store
    /// unchecked.
    pub fn validate(&self) -> Result<()> {
        if self.dynamodb_table.trim().is_empty() {
            return Err(JoppinError::UserError(format!(
                "config validation failed: dynamodb_table is not set. Use --table, {}, or the config file.",
                ENV_DYNAMODB_TABLE
            )));
        }

        Ok(())
    }

    fn normalize(&mut self) {
        if self
            .dynamodb_endpoint
            .as_deref()
            .is_some_and(|e| e.trim().is_empty())
        {
            self.dynamodb_endpoint = None;
        }
    }
}
