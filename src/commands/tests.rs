//! Tests for command dispatch and the locked runner.

use super::run::{RunStatus, run_locked};
use super::*;
use crate::cli::RunArgs;
use crate::error::JoppinError;
use crate::store::MemoryStore;
use crate::test_support::{FaultyStore, StoreCall, memory_client, test_config};
use tempfile::TempDir;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn run_args(args: &[&str], exit_code: bool) -> RunArgs {
    RunArgs {
        exit_code,
        argv: argv(args),
    }
}

#[test]
fn lock_command_leaves_lock_held() {
    let client = memory_client();
    let config = test_config("nightly", 60);

    let code = execute(Command::Lock, &config, &client).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(client.store().get("nightly").is_some());
}

#[test]
fn lock_command_fails_when_held() {
    let client = memory_client();
    let config = test_config("nightly", 60);

    execute(Command::Lock, &config, &client).unwrap();
    let err = execute(Command::Lock, &config, &client).unwrap_err();

    assert!(matches!(err, JoppinError::LockHeld(_)));
    assert_eq!(err.exit_code(), exit_codes::LOCK_HELD);
}

#[test]
fn lock_command_surfaces_store_failure() {
    let client = LockClient::new(FaultyStore::unreachable());
    let config = test_config("nightly", 60);

    let err = execute(Command::Lock, &config, &client).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::STORE_FAILURE);
}

#[test]
fn unlock_command_releases_lock() {
    let client = memory_client();
    let config = test_config("nightly", 60);

    execute(Command::Lock, &config, &client).unwrap();
    execute(Command::Unlock, &config, &client).unwrap();

    assert!(client.store().is_empty());
    execute(Command::Lock, &config, &client).unwrap();
}

#[test]
fn unlock_command_on_free_key_succeeds() {
    let client = memory_client();
    let config = test_config("nightly", 60);

    let code = execute(Command::Unlock, &config, &client).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);
}

#[test]
fn run_echo_releases_lock_afterwards() {
    let client = memory_client();
    let config = test_config("build", 30);

    let code = execute(
        Command::Run(run_args(&["echo", "hello"], false)),
        &config,
        &client,
    )
    .unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(client.store().get("build").is_none());
    client.acquire("build", 30).unwrap();
}

#[test]
fn run_executes_child_while_lock_is_held() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran");
    let marker_arg = marker.to_string_lossy().to_string();
    let store = FaultyStore::default();
    let client = LockClient::new(store);

    let outcome = run_locked(
        &client,
        "build",
        30,
        &argv(&["touch", marker_arg.as_str()]),
    )
    .unwrap();

    assert_eq!(outcome.program, "touch");
    assert!(outcome.status.is_success());
    assert!(marker.exists());
    assert_eq!(
        client.store().calls(),
        vec![
            StoreCall::Put("build".to_string()),
            StoreCall::Delete("build".to_string()),
        ]
    );
}

#[test]
fn run_missing_executable_still_releases_lock() {
    let client = memory_client();
    let config = test_config("build", 30);

    let code = execute(
        Command::Run(run_args(&["joppin-test-no-such-program"], false)),
        &config,
        &client,
    )
    .unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(client.store().is_empty());
    client.acquire("build", 30).unwrap();
}

#[test]
fn run_missing_executable_reports_failed_status() {
    let client = memory_client();

    let outcome =
        run_locked(&client, "build", 30, &argv(&["joppin-test-no-such-program"])).unwrap();

    assert!(
        matches!(outcome.status, RunStatus::Failed(ref msg) if msg.contains("failed to start"))
    );
    assert_eq!(outcome.status.exit_code(), exit_codes::COMMAND_FAILURE);
}

#[test]
fn run_nonzero_exit_is_ignored_by_default() {
    let client = memory_client();
    let config = test_config("build", 30);

    let code = execute(
        Command::Run(run_args(&["sh", "-c", "exit 3"], false)),
        &config,
        &client,
    )
    .unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(client.store().is_empty());
}

#[test]
fn run_with_exit_code_flag_propagates_child_status() {
    let client = memory_client();
    let config = test_config("build", 30);

    let code = execute(
        Command::Run(run_args(&["sh", "-c", "exit 3"], true)),
        &config,
        &client,
    )
    .unwrap();

    assert_eq!(code, 3);
    assert!(client.store().is_empty());
}

#[test]
fn run_with_exit_code_flag_maps_launch_failure() {
    let client = memory_client();
    let config = test_config("build", 30);

    let code = execute(
        Command::Run(run_args(&["joppin-test-no-such-program"], true)),
        &config,
        &client,
    )
    .unwrap();

    assert_eq!(code, exit_codes::COMMAND_FAILURE);
}

#[test]
fn run_does_not_spawn_when_lock_is_held() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran");
    let marker_arg = marker.to_string_lossy().to_string();
    let store = MemoryStore::new();
    let holder = LockClient::new(store.clone());
    let runner = LockClient::new(store.clone());

    holder.acquire("build", 30).unwrap();

    let err = run_locked(
        &runner,
        "build",
        30,
        &argv(&["touch", marker_arg.as_str()]),
    )
    .unwrap_err();

    assert!(matches!(err, JoppinError::LockHeld(_)));
    assert!(!marker.exists());
    // The other holder's lock is untouched.
    assert!(store.get("build").is_some());
}

#[test]
fn run_release_failure_is_an_error() {
    let client = LockClient::new(FaultyStore::failing_delete());

    let err = run_locked(&client, "build", 30, &argv(&["true"])).unwrap_err();

    assert!(matches!(err, JoppinError::StoreError(_)));
    assert_eq!(client.store().calls().len(), 2);
}

#[test]
fn run_with_empty_argv_is_user_error_and_takes_no_lock() {
    let client = memory_client();

    let err = run_locked(&client, "build", 30, &[]).unwrap_err();

    assert!(matches!(err, JoppinError::UserError(_)));
    assert!(client.store().is_empty());
}

#[test]
fn run_status_exit_codes() {
    assert_eq!(RunStatus::Exited(0).exit_code(), 0);
    assert_eq!(RunStatus::Exited(7).exit_code(), 7);
    assert_eq!(RunStatus::Signaled.exit_code(), exit_codes::COMMAND_FAILURE);
    assert!(RunStatus::Exited(0).is_success());
    assert!(!RunStatus::Signaled.is_success());
}
