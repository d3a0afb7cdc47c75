//! Orchestration interfaces.

use std::time::Duration;

use sercalc_core::ResultRecord;

/// Verdict of the comparison between series sum and control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The absolute difference is below the threshold.
    Achieved,
    /// The difference is at or above the threshold.
    NotAchieved,
    /// The control value is undefined for the input parameter.
    Undefined,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct VerificationOutcome {
    /// Series parameter.
    pub x: f64,
    /// Convergence threshold.
    pub epsilon: f64,
    /// The comparison record produced by the evaluator.
    pub record: ResultRecord,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a completed verification.
    fn present_outcome(&self, outcome: &VerificationOutcome, verdict: Verdict);

    /// Present a pipeline error.
    fn present_error(&self, error: &str);
}

/// Null presenter (does nothing).
pub struct NullResultPresenter;

impl ResultPresenter for NullResultPresenter {
    fn present_outcome(&self, _outcome: &VerificationOutcome, _verdict: Verdict) {}
    fn present_error(&self, _error: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_presenter() {
        let presenter = NullResultPresenter;
        let outcome = VerificationOutcome {
            x: 3.0,
            epsilon: 1e-7,
            record: ResultRecord {
                series_sum: 0.25,
                control_value: 0.25,
                difference: 0.0,
                converged: true,
                terms: 5,
            },
            duration: Duration::from_millis(1),
        };
        presenter.present_outcome(&outcome, Verdict::Achieved);
        presenter.present_error("nothing happens");
    }
}
