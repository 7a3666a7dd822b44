//! # Deferred Tasks
//!
//! A monotonic timer queue. Nothing in the app sleeps: an effect that needs
//! to "wait 200ms" schedules a task here, and the event loop drains whatever
//! is due each tick.
//!
//! Time is a `Duration` measured from session start. The loop passes
//! `Instant::elapsed()`, tests pass whatever they like.

use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    deadline: Duration,
    seq: u64,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Run `task` once `now + delay` has passed.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            deadline: now + delay,
            seq,
            task,
        });
    }

    /// Remove and return every task whose deadline is `<= now`, earliest
    /// first. Tasks with equal deadlines come out in scheduling order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.deadline, entry.seq));
        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
