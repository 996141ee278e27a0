//! CLI argument parsing for joppin.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// joppin: run commands under a distributed lock stored in DynamoDB.
///
/// A lock is a single item in a DynamoDB table, created with a conditional
/// write. Whoever creates it holds the lock until it is deleted.
#[derive(Parser, Debug)]
#[command(name = "joppin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command. Each one overrides the matching config
/// file entry and environment variable.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file (default: $HOME/.joppin.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// DynamoDB table holding lock records.
    #[arg(long, global = true, value_name = "NAME")]
    pub table: Option<String>,

    /// DynamoDB endpoint URL (e.g. http://localhost:8000).
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Name of the lock.
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// Lock timeout in seconds, stored as the record's expiry.
    #[arg(long, global = true, value_name = "SECS", allow_negative_numbers = true)]
    pub timeout: Option<i64>,
}

impl GlobalArgs {
    /// The config overrides given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            dynamodb_table: self.table.clone(),
            dynamodb_endpoint: self.endpoint.clone(),
            lock_key: self.key.clone(),
            lock_timeout: self.timeout,
        }
    }
}

/// Available commands for joppin.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Acquire the lock and exit.
    ///
    /// The lock stays held after joppin exits; release it with `unlock`.
    Lock,

    /// Release the lock.
    ///
    /// Deletes the lock record whether or not this caller acquired it.
    /// Succeeds when the lock is not held.
    Unlock,

    /// Run a command while holding the lock.
    ///
    /// Acquires the lock, runs the command with inherited stdout/stderr,
    /// and releases the lock when the command finishes.
    Run(RunArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Exit with the command's exit code instead of 0.
    #[arg(long)]
    pub exit_code: bool,

    /// Program to run, followed by its arguments.
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub argv: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
