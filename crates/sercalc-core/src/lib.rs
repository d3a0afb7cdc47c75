//! # sercalc-core
//!
//! Core library for SerCalc-rs, a concurrent series-sum verifier.
//! Provides the series accumulator, the closed-form control evaluator, and
//! the single-slot handoff channel that coordinates them.

pub mod cancel;
pub mod constants;
pub mod control;
pub mod error;
pub mod handoff;
pub mod series;
pub mod term;

// Re-exports
pub use cancel::{CancellationToken, DeadlineToken};
pub use constants::{exit_codes, DEFAULT_EPSILON, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, DEFAULT_X};
pub use control::{control_value, ControlEvaluator, ResultRecord};
pub use error::SumError;
pub use handoff::{Handoff, WaitPolicy};
pub use series::{SeriesAccumulator, SeriesOutcome};
pub use term::series_term;

/// Sum the series and compare it to the control value on the current thread.
///
/// This is a convenience function for simple use cases. For concurrent
/// execution, wait policies, and deadlines, use [`SeriesAccumulator`] and
/// [`ControlEvaluator`] with an explicit [`Handoff`].
///
/// # Example
/// ```
/// let record = sercalc_core::verify(3.0, 1e-7).unwrap();
/// assert!(record.achieved(1e-7));
/// ```
pub fn verify(x: f64, epsilon: f64) -> Result<ResultRecord, SumError> {
    let handoff = Handoff::new();
    let cancel = CancellationToken::new();
    SeriesAccumulator::new(x, epsilon).run(&cancel, &handoff);
    // The sum is already published, so the evaluator returns without waiting.
    ControlEvaluator::new(x, WaitPolicy::Blocking, constants::DEFAULT_TIMEOUT)
        .run(&handoff, &cancel)
}
