//! Command implementations for joppin.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Configuration is resolved and the store connected once,
//! then the command runs against an explicit [`LockClient`].

mod lock;
mod run;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use crate::locks::LockClient;
use crate::store::{DynamoDbStore, LockStore};

/// Dispatch a command to its implementation.
///
/// Returns the process exit code on success. Errors carry their own exit
/// code via `JoppinError::exit_code`.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let config = Config::resolve(cli.global.config.as_deref(), &cli.global.overrides())?;
    let store = DynamoDbStore::connect(&config)?;
    tracing::debug!(table = store.table(), key = %config.lock_key, "configuration resolved");

    let client = LockClient::new(store);
    execute(cli.command, &config, &client)
}

/// Run a parsed command against an already constructed client.
pub fn execute<S: LockStore>(
    command: Command,
    config: &Config,
    client: &LockClient<S>,
) -> Result<i32> {
    match command {
        Command::Lock => lock::cmd_lock(config, client).map(|()| exit_codes::SUCCESS),
        Command::Unlock => lock::cmd_unlock(config, client).map(|()| exit_codes::SUCCESS),
        Command::Run(args) => run::cmd_run(args, config, client),
    }
}
