//! Cancelable one-shot delay

use std::time::{Duration, Instant};

/// Identifies one scheduling of a `CancelableDelay`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayTicket(u64);

/// A single pending deadline. Rescheduling invalidates the previous one.
///
/// Hosts either poll with `fire_if_due` or run their own timer and hand the
/// ticket back to `fire`; a stale ticket never fires.
#[derive(Debug, Default)]
pub struct CancelableDelay {
    deadline: Option<Instant>,
    generation: u64,
}

impl CancelableDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) -> DelayTicket {
        self.generation += 1;
        self.deadline = Some(now + delay);
        DelayTicket(self.generation)
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire once `now` reaches the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire if `ticket` is still the pending schedule
    pub fn fire(&mut self, ticket: DelayTicket) -> bool {
        if ticket.0 != self.generation || self.deadline.is_none() {
            return false;
        }
        self.deadline = None;
        true
    }
}
