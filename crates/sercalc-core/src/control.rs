//! Control evaluation worker.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::error::SumError;
use crate::handoff::{Handoff, WaitPolicy};

/// Final comparison record: series sum, closed-form control value, and the
/// absolute difference between them.
#[derive(Debug, Clone, Copy)]
pub struct ResultRecord {
    /// The accumulated series sum.
    pub series_sum: f64,
    /// The closed-form control value (NaN when undefined).
    pub control_value: f64,
    /// `|series_sum - control_value|`; NaN when the control is undefined.
    pub difference: f64,
    /// Whether the accumulator met its convergence criterion.
    pub converged: bool,
    /// Number of terms that went into the sum.
    pub terms: u64,
}

impl ResultRecord {
    /// Whether the difference is within the threshold.
    ///
    /// Always `false` against an undefined control value (NaN compares
    /// false), so an undefined comparison reports "not achieved."
    #[must_use]
    pub fn achieved(&self, epsilon: f64) -> bool {
        self.difference < epsilon
    }

    /// Whether the control value is defined for the input parameter.
    #[must_use]
    pub fn control_defined(&self) -> bool {
        !self.control_value.is_nan()
    }
}

/// Closed-form control value `0.5 * ln((x + 1) / (x - 1))`.
///
/// Defined only for x > 1; anything else yields the NaN sentinel.
///
/// # Example
/// ```
/// let y = sercalc_core::control_value(3.0);
/// assert!((y - 0.5 * 2.0f64.ln()).abs() < 1e-15);
/// assert!(sercalc_core::control_value(1.0).is_nan());
/// ```
#[must_use]
pub fn control_value(x: f64) -> f64 {
    if x > 1.0 {
        0.5 * ((x + 1.0) / (x - 1.0)).ln()
    } else {
        f64::NAN
    }
}

/// Consumer half of the pipeline.
///
/// Waits on the handoff with bounded, repeating waits, retrieves the series
/// sum exactly once, computes the control value, and produces the
/// comparison record. A deadline expiry with no published value surfaces as
/// [`SumError::Unavailable`] rather than a hang.
pub struct ControlEvaluator {
    x: f64,
    policy: WaitPolicy,
    timeout: Duration,
}

impl ControlEvaluator {
    /// Create an evaluator for the given parameter, wait policy, and
    /// overall wait budget.
    #[must_use]
    pub fn new(x: f64, policy: WaitPolicy, timeout: Duration) -> Self {
        Self { x, policy, timeout }
    }

    /// Wait for the series sum and produce the comparison record.
    ///
    /// Sets the stop signal once the record is built (idempotent; the
    /// producer usually set it already).
    pub fn run(
        &self,
        handoff: &Handoff,
        cancel: &CancellationToken,
    ) -> Result<ResultRecord, SumError> {
        let deadline = Instant::now() + self.timeout;
        let outcome = handoff.recv_deadline(deadline, self.policy, cancel)?;

        let series_sum = outcome.sum();
        let control = control_value(self.x);
        let record = ResultRecord {
            series_sum,
            control_value: control,
            difference: (series_sum - control).abs(),
            converged: outcome.is_converged(),
            terms: outcome.terms(),
        };
        cancel.cancel();

        debug!(
            series_sum,
            control_value = control,
            difference = record.difference,
            "comparison record built"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesOutcome;

    fn run_with(outcome: SeriesOutcome, x: f64) -> ResultRecord {
        let handoff = Handoff::new();
        handoff.publish(outcome);
        let cancel = CancellationToken::new();
        ControlEvaluator::new(x, WaitPolicy::Blocking, Duration::from_secs(1))
            .run(&handoff, &cancel)
            .unwrap()
    }

    #[test]
    fn control_value_for_three() {
        // 0.5 * ln((3+1)/(3-1)) = 0.5 * ln 2
        let expected = 0.5 * 2.0f64.ln();
        assert!((control_value(3.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn control_value_undefined_at_or_below_one() {
        assert!(control_value(1.0).is_nan());
        assert!(control_value(0.5).is_nan());
        assert!(control_value(-3.0).is_nan());
    }

    #[test]
    fn builds_record_from_published_sum() {
        let sum = 0.5 * 2.0f64.ln() - 1e-9;
        let record = run_with(SeriesOutcome::Converged { sum, terms: 6 }, 3.0);

        assert_eq!(record.series_sum, sum);
        assert!(record.control_defined());
        assert!(record.difference >= 0.0);
        assert!(record.achieved(1e-7));
        assert!(record.converged);
        assert_eq!(record.terms, 6);
    }

    #[test]
    fn undefined_control_never_achieves() {
        let record = run_with(
            SeriesOutcome::Converged {
                sum: 0.3,
                terms: 10,
            },
            0.5,
        );
        assert!(!record.control_defined());
        assert!(record.difference.is_nan());
        assert!(!record.achieved(f64::MAX));
    }

    #[test]
    fn aborted_outcome_keeps_partial_tag() {
        let record = run_with(
            SeriesOutcome::Aborted {
                partial_sum: 0.2,
                terms: 3,
            },
            3.0,
        );
        assert!(!record.converged);
        assert_eq!(record.series_sum, 0.2);
    }

    #[test]
    fn empty_handoff_reports_unavailable() {
        let handoff = Handoff::new();
        let cancel = CancellationToken::new();
        let result = ControlEvaluator::new(3.0, WaitPolicy::Blocking, Duration::from_millis(50))
            .run(&handoff, &cancel);
        assert!(matches!(result, Err(SumError::Unavailable)));
    }

    #[test]
    fn sets_stop_signal_after_consuming() {
        let handoff = Handoff::new();
        handoff.publish(SeriesOutcome::Converged {
            sum: 0.25,
            terms: 2,
        });
        let cancel = CancellationToken::new();
        ControlEvaluator::new(3.0, WaitPolicy::Blocking, Duration::from_secs(1))
            .run(&handoff, &cancel)
            .unwrap();
        assert!(cancel.is_cancelled());
    }
}
