// SPDX-License-Identifier: MPL-2.0
//! Deferred messages for the UI.
//!
//! `Scheduler` holds messages until a deadline passes. It does not run on
//! its own: the owner polls [`Scheduler::drain_due`] from a periodic tick.
//! Messages due at the same instant come out in the order they were
//! scheduled.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle of a scheduled message, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Pending messages ordered by deadline.
#[derive(Debug)]
pub struct Scheduler<M> {
    /// Keyed by deadline, then by id for FIFO order on ties.
    entries: BTreeMap<(Instant, TimerId), M>,
    next_id: u64,
}

impl<M> Default for Scheduler<M> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<M> Scheduler<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `message` to be due `delay` from now.
    pub fn after(&mut self, delay: Duration, message: M) -> TimerId {
        self.schedule(Instant::now(), delay, message)
    }

    /// Schedules `message` to be due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, message: M) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert((now + delay, id), message);
        id
    }

    /// Drops a pending message. Returns `false` if it already fired or
    /// was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.entries.keys().find(|(_, entry_id)| *entry_id == id).copied();
        key.and_then(|key| self.entries.remove(&key)).is_some()
    }

    /// Removes and returns every message due at `now`, in deadline order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<M> {
        let later = self.entries.split_off(&(now, TimerId(u64::MAX)));
        let due = std::mem::replace(&mut self.entries, later);
        due.into_values().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_is_due_before_deadline() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, 100 * MS, "reveal");

        assert!(scheduler.drain_due(start + 99 * MS).is_empty());
        assert_eq!(scheduler.drain_due(start + 100 * MS), vec!["reveal"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn due_messages_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, 300 * MS, "hide");
        scheduler.schedule(start, 100 * MS, "reveal");
        scheduler.schedule(start, 5000 * MS, "dismiss");

        assert_eq!(scheduler.drain_due(start + 400 * MS), vec!["reveal", "hide"]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(start + 5000 * MS));
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        for n in 0..5 {
            scheduler.schedule(start, 100 * MS, n);
        }
        assert_eq!(scheduler.drain_due(start + 100 * MS), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn cancelled_messages_never_fire() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let dismiss = scheduler.schedule(start, 5000 * MS, "dismiss");
        scheduler.schedule(start, 100 * MS, "enter");

        assert!(scheduler.cancel(dismiss));
        assert!(!scheduler.cancel(dismiss));
        assert_eq!(scheduler.drain_due(start + 10_000 * MS), vec!["enter"]);
    }

    #[test]
    fn cancelling_fired_timer_returns_false() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(start, MS, ());
        scheduler.drain_due(start + MS);
        assert!(!scheduler.cancel(id));
    }
}
