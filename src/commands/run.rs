//! `run` command: execute a program while holding the lock.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::{JoppinError, Result};
use crate::exit_codes;
use crate::locks::LockClient;
use crate::store::LockStore;
use std::process::{Command, Stdio};

/// How the wrapped program ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The program exited with this code.
    Exited(i32),
    /// The program was terminated by a signal.
    Signaled,
    /// The program could not be started or waited on.
    Failed(String),
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Exited(0))
    }

    /// Exit code to report for this status when `--exit-code` is given.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Exited(code) => *code,
            RunStatus::Signaled | RunStatus::Failed(_) => exit_codes::COMMAND_FAILURE,
        }
    }
}

/// Result of a locked run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The program that was run.
    pub program: String,
    /// How it ended.
    pub status: RunStatus,
}

/// Run `argv` while holding the lock for `key`.
///
/// The lock is acquired first; acquisition errors are returned before
/// anything is spawned. The program inherits stdin, stdout, and stderr and
/// is waited on without a timeout. The lock is then released whatever the
/// program did, including when it could not be launched. A failed release
/// is returned as an error.
pub fn run_locked<S: LockStore>(
    client: &LockClient<S>,
    key: &str,
    timeout_secs: i64,
    argv: &[String],
) -> Result<RunOutcome> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| JoppinError::UserError("no command given to run".to_string()))?;

    let guard = client.lock(key, timeout_secs)?;

    let status = spawn_and_wait(program, args);
    match &status {
        RunStatus::Exited(0) => tracing::info!(program, "command finished"),
        RunStatus::Exited(code) => {
            tracing::warn!(program, code, "command exited with non-zero status")
        }
        RunStatus::Signaled => tracing::warn!(program, "command terminated by signal"),
        RunStatus::Failed(reason) => tracing::warn!(program, %reason, "run failed"),
    }

    guard.release()?;

    Ok(RunOutcome {
        program: program.clone(),
        status,
    })
}

fn spawn_and_wait(program: &str, args: &[String]) -> RunStatus {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return RunStatus::Failed(format!("failed to start '{}': {}", program, e)),
    };

    match child.wait() {
        Ok(status) => match status.code() {
            Some(code) => RunStatus::Exited(code),
            None => RunStatus::Signaled,
        },
        Err(e) => RunStatus::Failed(format!("failed to wait for '{}': {}", program, e)),
    }
}

/// Handle `joppin run`.
///
/// Without `--exit-code` the wrapped program's failure is only logged and
/// joppin exits 0.
pub fn cmd_run<S: LockStore>(
    args: RunArgs,
    config: &Config,
    client: &LockClient<S>,
) -> Result<i32> {
    tracing::debug!(argv = ?args.argv, key = %config.lock_key, "run called");

    let outcome = run_locked(client, &config.lock_key, config.lock_timeout, &args.argv)?;

    if args.exit_code {
        Ok(outcome.status.exit_code())
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
