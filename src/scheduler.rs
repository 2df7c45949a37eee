//! One-shot timers keyed by id.
//!
//! A controller never receives a closure back from its scheduler. Instead the
//! host calls [`SlideController::on_timer`](crate::controller::SlideController::on_timer)
//! with the id of whatever fired, and the controller ignores ids it no longer
//! owns. Repeating behavior (autoplay) is built by rescheduling on each tick.

use std::collections::BTreeSet;
use std::fmt;

/// Opaque handle for a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

pub trait Scheduler {
    /// Arrange for `id` to be delivered once, `delay_ms` from now.
    fn schedule(&mut self, delay_ms: u32) -> TimerId;

    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Scheduler driven by an explicit clock instead of the browser event loop.
///
/// Used by non-browser hosts and by the test suite: time only moves when
/// [`ManualScheduler::pop_due`] is asked for timers up to a deadline.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u32,
    // (due, id) keeps ties in scheduling order
    pending: BTreeSet<(u64, TimerId)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|&(_, pending)| pending == id)
    }

    /// Remove and return the earliest timer due at or before `deadline_ms`,
    /// moving the clock to its due time. When nothing is due the clock moves
    /// to `deadline_ms` and `None` is returned.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerId> {
        match self.pending.first().copied() {
            Some((due, id)) if due <= deadline_ms => {
                self.pending.remove(&(due, id));
                self.now_ms = self.now_ms.max(due);
                Some(id)
            }
            _ => {
                self.now_ms = self.now_ms.max(deadline_ms);
                None
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.insert((self.now_ms + u64::from(delay_ms), id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(_, pending)| pending != id);
    }
}
