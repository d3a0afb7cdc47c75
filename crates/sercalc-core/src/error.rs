//! Error type for the verification pipeline.

/// Error type for series verification.
///
/// Arithmetic edge cases (overflow, undefined control value) never surface
/// here; they are encoded into the result record instead. Only "no result
/// was produced at all" conditions become errors.
#[derive(Debug, thiserror::Error)]
pub enum SumError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The run was cancelled before a result was produced.
    #[error("verification cancelled")]
    Cancelled,

    /// A worker failed to finish within its deadline.
    #[error("worker timed out after {0}")]
    Timeout(String),

    /// The consumer's wait deadline expired with no published value.
    #[error("no result available before the deadline")]
    Unavailable,
}
