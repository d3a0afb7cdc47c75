//! Core orchestration: worker spawning, join-with-timeout, verdict analysis.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use tracing::{debug, warn};

use sercalc_core::{
    CancellationToken, ControlEvaluator, Handoff, ResultRecord, SeriesAccumulator, SumError,
    WaitPolicy,
};

use crate::interfaces::{Verdict, VerificationOutcome};

/// Extra time allowed for thread wind-down past the evaluator's deadline.
const JOIN_GRACE: Duration = Duration::from_millis(500);

/// Parameters of a verification run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineParams {
    /// Series parameter.
    pub x: f64,
    /// Convergence threshold.
    pub epsilon: f64,
    /// Consumer wait policy.
    pub policy: WaitPolicy,
    /// Overall deadline for obtaining a result.
    pub timeout: Duration,
}

impl PipelineParams {
    /// Parameters with the default wait policy and timeout.
    #[must_use]
    pub fn new(x: f64, epsilon: f64) -> Self {
        Self {
            x,
            epsilon,
            policy: WaitPolicy::default(),
            timeout: sercalc_core::DEFAULT_TIMEOUT,
        }
    }
}

/// Run the two-worker pipeline to completion.
///
/// Spawns the accumulator and evaluator as named OS threads and collects
/// the evaluator's record over a bounded channel wait. On expiry the stop
/// signal is set and a timeout error is reported; workers are only ever
/// shut down cooperatively, never killed.
pub fn run_pipeline(
    params: &PipelineParams,
    cancel: &CancellationToken,
) -> Result<VerificationOutcome, SumError> {
    let start = Instant::now();
    let handoff = Handoff::new();

    let accumulator = SeriesAccumulator::new(params.x, params.epsilon);
    let acc_handoff = handoff.clone();
    let acc_cancel = cancel.clone();
    let producer = thread::Builder::new()
        .name("series-accumulator".into())
        .spawn(move || {
            accumulator.run(&acc_cancel, &acc_handoff);
        })
        .map_err(|e| SumError::Config(format!("failed to spawn worker: {e}")))?;

    let evaluator = ControlEvaluator::new(params.x, params.policy, params.timeout);
    let (tx, rx) = crossbeam_channel::bounded(1);
    let eval_cancel = cancel.clone();
    let consumer = thread::Builder::new()
        .name("control-evaluator".into())
        .spawn(move || {
            let _ = tx.send(evaluator.run(&handoff, &eval_cancel));
        })
        .map_err(|e| SumError::Config(format!("failed to spawn worker: {e}")))?;

    // The evaluator bounds its own wait by `timeout`; the channel wait adds
    // a grace window for thread wind-down.
    let result = match rx.recv_timeout(params.timeout + JOIN_GRACE) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            Err(SumError::Timeout(format!("{:?}", params.timeout)))
        }
        Err(RecvTimeoutError::Disconnected) => Err(SumError::Unavailable),
    };

    // Both workers observe the stop signal and exit promptly; the joins
    // below are therefore bounded.
    cancel.cancel();
    join_worker(producer, "series-accumulator");
    join_worker(consumer, "control-evaluator");

    let record = result?;
    let duration = start.elapsed();
    debug!(?duration, "pipeline complete");

    Ok(VerificationOutcome {
        x: params.x,
        epsilon: params.epsilon,
        record,
        duration,
    })
}

fn join_worker(handle: thread::JoinHandle<()>, name: &str) {
    if handle.join().is_err() {
        warn!(worker = name, "worker panicked");
    }
}

/// Classify a comparison record against the threshold.
#[must_use]
pub fn analyze_outcome(record: &ResultRecord, epsilon: f64) -> Verdict {
    if !record.control_defined() {
        Verdict::Undefined
    } else if record.achieved(epsilon) {
        Verdict::Achieved
    } else {
        Verdict::NotAchieved
    }
}
