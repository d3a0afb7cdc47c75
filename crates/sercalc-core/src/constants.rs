//! Shared constants and process exit codes.

use std::time::Duration;

/// Default series parameter.
pub const DEFAULT_X: f64 = 3.0;

/// Default convergence threshold.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Default interval between bounded waits on the handoff.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default overall deadline for obtaining a result.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Process exit codes.
pub mod exit_codes {
    /// Successful completion (whether or not precision was achieved).
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A worker failed to finish within its deadline.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// No result was published before the consumer's deadline.
    pub const ERROR_UNAVAILABLE: i32 = 3;
    /// Configuration error.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by the user (SIGINT convention).
    pub const ERROR_CANCELED: i32 = 130;
}
