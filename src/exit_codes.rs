//! Exit code constants for the joppin CLI.
//!
//! - 0: Success (also `run` whose child failed, unless `--exit-code` is given)
//! - 1: User error (bad args, bad config)
//! - 2: Lock held by someone else
//! - 3: Lock store failure
//! - 4: Wrapped command could not be launched or was killed (`run --exit-code`)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Lock contention: the conditional insert found an existing record.
pub const LOCK_HELD: i32 = 2;

/// Store failure: transport, credentials, or any other backend error.
pub const STORE_FAILURE: i32 = 3;

/// Command failure: the wrapped program did not produce an exit code.
pub const COMMAND_FAILURE: i32 = 4;
