//! Single-slot handoff channel between the two pipeline workers.
//!
//! The producer publishes at most one [`SeriesOutcome`]; the consumer
//! retrieves it at most once. Publishing into a full slot is detected and
//! skipped, so a late redundant publish under the stop-signal race can
//! neither block nor overwrite the first value.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::cancel::CancellationToken;
use crate::constants::DEFAULT_POLL_INTERVAL;
use crate::error::SumError;
use crate::series::SeriesOutcome;

/// How the consumer waits for a value to arrive.
///
/// Both variants are deadline-bounded; neither can wait forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Park on the internal condvar until a publish or the deadline.
    Blocking,
    /// Wake at a fixed interval to re-check the stop signal between waits.
    Polling(Duration),
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::Blocking
    }
}

struct Slot {
    value: Option<SeriesOutcome>,
    taken: bool,
}

/// Single-slot, write-once/read-once channel.
///
/// Clones share the same slot; the producer and consumer each hold one.
#[derive(Clone)]
pub struct Handoff {
    slot: Arc<(Mutex<Slot>, Condvar)>,
}

impl Handoff {
    /// Create an empty handoff.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new((
                Mutex::new(Slot {
                    value: None,
                    taken: false,
                }),
                Condvar::new(),
            )),
        }
    }

    /// Publish a value, waking any waiting consumer.
    ///
    /// Returns `false` if the slot already held (or already delivered) a
    /// value; the new value is dropped and the first one stands.
    pub fn publish(&self, outcome: SeriesOutcome) -> bool {
        let (lock, cvar) = &*self.slot;
        let mut slot = lock.lock();
        if slot.value.is_some() || slot.taken {
            return false;
        }
        slot.value = Some(outcome);
        cvar.notify_all();
        true
    }

    /// Whether a published value is waiting to be taken.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slot.0.lock().value.is_some()
    }

    /// Take the value if one is ready. Each published value can be taken
    /// at most once.
    pub fn try_take(&self) -> Option<SeriesOutcome> {
        let mut slot = self.slot.0.lock();
        let value = slot.value.take();
        if value.is_some() {
            slot.taken = true;
        }
        value
    }

    /// Wait for a value until `deadline`, re-checking the stop signal
    /// between bounded waits.
    ///
    /// The value-present check runs under the slot mutex, so a publish that
    /// happened before a stop-signal observation is never missed. When the
    /// signal is observed with the slot still empty, one extra wait slice
    /// covers the producer's final publish-on-exit before giving up.
    pub fn recv_deadline(
        &self,
        deadline: Instant,
        policy: WaitPolicy,
        cancel: &CancellationToken,
    ) -> Result<SeriesOutcome, SumError> {
        let (lock, cvar) = &*self.slot;
        let mut slot = lock.lock();
        let mut cancel_seen = false;

        loop {
            if let Some(value) = slot.value.take() {
                slot.taken = true;
                return Ok(value);
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(SumError::Unavailable);
            }

            if cancel.is_cancelled() {
                if cancel_seen {
                    return Err(SumError::Cancelled);
                }
                cancel_seen = true;
            }

            let until = match policy {
                WaitPolicy::Blocking if !cancel_seen => deadline,
                WaitPolicy::Blocking => deadline.min(now + DEFAULT_POLL_INTERVAL),
                WaitPolicy::Polling(interval) => deadline.min(now + interval),
            };
            let _ = cvar.wait_until(&mut slot, until);
        }
    }
}

impl Default for Handoff {
    fn default() -> Self {
        Self::new()
    }
}
