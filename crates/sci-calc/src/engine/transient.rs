//! Deferred reverts for transient display text
//!
//! Time is logical: the host advances it, so tests control it exactly the way
//! a fake clock would. A revert carries the display generation it was
//! scheduled under; the engine drops it if the display moved on since.

use std::collections::VecDeque;
use std::time::Duration;

/// A scheduled return from transient text to a normal display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRevert {
    /// Display generation current when the transient text was shown
    pub generation: u64,
    /// The transient text (error or message)
    pub transient_text: String,
    /// Text to show once the revert fires
    pub restore_text: String,
    /// Logical time at which the revert is due
    pub due_at: Duration,
}

/// Pending reverts ordered by due time
#[derive(Debug, Clone, Default)]
pub struct RevertQueue {
    now: Duration,
    pending: VecDeque<PendingRevert>,
}

impl RevertQueue {
    /// Creates an empty queue at logical time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of reverts not yet fired
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is scheduled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules a revert `delay` from now
    pub fn schedule(
        &mut self,
        generation: u64,
        transient_text: impl Into<String>,
        restore_text: impl Into<String>,
        delay: Duration,
    ) {
        let revert = PendingRevert {
            generation,
            transient_text: transient_text.into(),
            restore_text: restore_text.into(),
            due_at: self.now + delay,
        };
        // Keep the queue sorted by due time; equal times stay in schedule order.
        let index = self
            .pending
            .iter()
            .position(|r| r.due_at > revert.due_at)
            .unwrap_or(self.pending.len());
        self.pending.insert(index, revert);
    }

    /// Moves time forward and returns every revert now due, earliest first
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PendingRevert> {
        self.now += elapsed;
        let mut due = Vec::new();
        while self.pending.front().is_some_and(|r| r.due_at <= self.now) {
            if let Some(revert) = self.pending.pop_front() {
                due.push(revert);
            }
        }
        due
    }

    /// Time until the last scheduled revert is due (zero if none)
    #[must_use]
    pub fn time_until_idle(&self) -> Duration {
        self.pending
            .back()
            .map_or(Duration::ZERO, |r| r.due_at.saturating_sub(self.now))
    }

    /// Removes and returns the revert for the transient currently on display
    pub fn take_active(&mut self, generation: u64, display_text: &str) -> Option<PendingRevert> {
        let index = self
            .pending
            .iter()
            .position(|r| r.generation == generation && r.transient_text == display_text)?;
        self.pending.remove(index)
    }

    /// Drops every pending revert
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
