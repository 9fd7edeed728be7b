//! Time management and cooperative search interruption.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Throttle for clock reads: check wall time once per this many nodes.
const NODE_CHECK_MASK: u64 = 1023;

/// Shared stop switch plus soft and hard deadlines for one search.
///
/// The soft deadline gates new iterative-deepening iterations; the hard
/// deadline aborts the tree walk in flight. Either way the caller keeps
/// the last fully completed iteration.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    started: Instant,
    soft_limit: Option<Duration>,
    hard_limit: Option<Duration>,
}

impl SearchControl {
    /// A control that spends at most `budget`: soft limit at 80% of it,
    /// hard limit at the full budget.
    pub fn new_timed(stopped: Arc<AtomicBool>, budget: Duration) -> SearchControl {
        SearchControl {
            stopped,
            started: Instant::now(),
            soft_limit: Some(budget.mul_f64(0.8)),
            hard_limit: Some(budget),
        }
    }

    /// A control with no deadlines; stops only via the shared flag.
    /// Depth-limited searches in tests use this.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> SearchControl {
        SearchControl {
            stopped,
            started: Instant::now(),
            soft_limit: None,
            hard_limit: None,
        }
    }

    /// Hard-deadline check, called from inside the tree walk. Reads the
    /// clock only every 1024 nodes; trips the shared flag on expiry so the
    /// whole search winds down together.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        if nodes & NODE_CHECK_MASK != 0 {
            return false;
        }
        if let Some(hard) = self.hard_limit
            && self.started.elapsed() >= hard
        {
            self.stopped.store(true, Ordering::Relaxed);
            return true;
        }
        false
    }

    /// Soft-deadline check, called between iterative-deepening iterations.
    pub fn should_stop_iterating(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        match self.soft_limit {
            Some(soft) => self.started.elapsed() >= soft,
            None => false,
        }
    }

    /// Whether the stop flag has been raised, without touching the clock.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
