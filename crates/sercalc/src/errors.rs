//! Error handling and exit codes.

use sercalc_core::constants::exit_codes;
use sercalc_core::SumError;

/// Map an application error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SumError>() {
        Some(SumError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(SumError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(SumError::Timeout(_)) => exit_codes::ERROR_TIMEOUT,
        Some(SumError::Unavailable) => exit_codes::ERROR_UNAVAILABLE,
        None => exit_codes::ERROR_GENERIC,
    }
}
