//! Series accumulation worker.

use tracing::{debug, warn};

use crate::cancel::CancellationToken;
use crate::handoff::Handoff;
use crate::term::series_term;

/// Final value published by the accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesOutcome {
    /// The next term fell below the threshold (or underflowed to zero).
    Converged {
        /// Accumulated sum.
        sum: f64,
        /// Number of terms summed.
        terms: u64,
    },
    /// The stop signal arrived first; the sum covers only `terms` terms.
    Aborted {
        /// Best partial sum obtained before the stop.
        partial_sum: f64,
        /// Number of terms summed.
        terms: u64,
    },
}

impl SeriesOutcome {
    /// The accumulated sum, converged or not.
    #[must_use]
    pub fn sum(&self) -> f64 {
        match *self {
            Self::Converged { sum, .. } => sum,
            Self::Aborted { partial_sum, .. } => partial_sum,
        }
    }

    /// Number of terms that went into the sum.
    #[must_use]
    pub fn terms(&self) -> u64 {
        match *self {
            Self::Converged { terms, .. } | Self::Aborted { terms, .. } => terms,
        }
    }

    /// Whether the convergence criterion was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Producer half of the pipeline.
///
/// Accumulates series terms until the convergence criterion is met or the
/// stop signal arrives, then publishes the outcome exactly once. Every exit
/// path publishes, so a consumer waiting on the handoff always makes
/// progress once this worker has started.
pub struct SeriesAccumulator {
    x: f64,
    epsilon: f64,
}

impl SeriesAccumulator {
    /// Create an accumulator for the given series parameter and threshold.
    #[must_use]
    pub fn new(x: f64, epsilon: f64) -> Self {
        Self { x, epsilon }
    }

    /// Run the accumulation loop and publish the outcome.
    ///
    /// The stop signal is checked before each term, so a pre-set signal
    /// yields an immediate `Aborted` publish with a zero-term sum. The
    /// signal is set after publishing; the handoff tolerates the benign
    /// race where the consumer observes the signal first.
    pub fn run(&self, cancel: &CancellationToken, handoff: &Handoff) -> SeriesOutcome {
        if self.x.abs() <= 1.0 {
            warn!(x = self.x, "series parameter outside |x| > 1; the control comparison will be undefined");
        }

        let mut sum = 0.0;
        let mut n: u64 = 1;

        let outcome = loop {
            if cancel.is_cancelled() {
                break SeriesOutcome::Aborted {
                    partial_sum: sum,
                    terms: n - 1,
                };
            }

            let term = series_term(n, self.x);
            if term == 0.0 || term.abs() < self.epsilon {
                break SeriesOutcome::Converged { sum, terms: n - 1 };
            }

            sum += term;
            n += 1;
            // Keep the loop preemptible between iterations.
            std::thread::yield_now();
        };

        match outcome {
            SeriesOutcome::Converged { sum, terms } => {
                debug!(terms, sum, "series converged below threshold");
            }
            SeriesOutcome::Aborted { terms, .. } => {
                debug!(terms, "accumulation stopped before convergence");
            }
        }

        handoff.publish(outcome);
        cancel.cancel();
        outcome
    }
}
