//! Cooperative cancellation primitives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::SumError;

/// Cooperative stop signal shared by both pipeline workers.
///
/// Either worker (or a Ctrl+C handler) may set it; setting an already-set
/// token is a no-op. Workers observe it at every loop checkpoint.
///
/// # Example
/// ```
/// use sercalc_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// token.cancel(); // idempotent
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), SumError> {
        if self.is_cancelled() {
            Err(SumError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A cancellation token with an absolute deadline.
///
/// Considered cancelled once either `cancel()` was called or the deadline
/// has passed.
#[derive(Clone)]
pub struct DeadlineToken {
    inner: CancellationToken,
    deadline: Instant,
}

impl DeadlineToken {
    /// Create a token that expires after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            inner: CancellationToken::new(),
            deadline: Instant::now() + timeout,
        }
    }

    /// Check if cancellation has been requested (manual or deadline).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled() || Instant::now() >= self.deadline
    }

    /// Request manual cancellation.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Check for cancellation (manual or deadline), returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), SumError> {
        if self.inner.is_cancelled() {
            return Err(SumError::Cancelled);
        }
        if Instant::now() >= self.deadline {
            return Err(SumError::Timeout("deadline reached".to_string()));
        }
        Ok(())
    }

    /// Remaining time before the deadline.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// The inner `CancellationToken`, for APIs without deadline support.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn check_cancelled_ok() {
        let token = CancellationToken::new();
        assert!(token.check_cancelled().is_ok());
    }

    #[test]
    fn check_cancelled_err() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(token.check_cancelled(), Err(SumError::Cancelled)));
    }

    #[test]
    fn cancellation_propagates_through_clone() {
        let token1 = CancellationToken::new();
        let token2 = token1.clone();
        token1.cancel();
        assert!(token2.is_cancelled());
    }

    #[test]
    fn deadline_token_not_expired() {
        let token = DeadlineToken::new(Duration::from_secs(60));
        assert!(!token.is_cancelled());
        assert!(token.check_cancelled().is_ok());
        assert!(token.remaining() > Duration::from_secs(0));
    }

    #[test]
    fn deadline_token_manual_cancel() {
        let token = DeadlineToken::new(Duration::from_secs(60));
        token.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(SumError::Cancelled)));
    }

    #[test]
    fn deadline_token_expired() {
        let token = DeadlineToken::new(Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(1));
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(SumError::Timeout(_))));
    }

    #[test]
    fn deadline_token_inner_access() {
        let token = DeadlineToken::new(Duration::from_secs(60));
        let inner = token.token();
        assert!(!inner.is_cancelled());
        token.cancel();
        assert!(inner.is_cancelled());
    }
}
