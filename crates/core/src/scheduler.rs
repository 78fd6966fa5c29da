//! Cancellable one-shot timers on the host's single execution context.
//!
//! Timers carry a typed event instead of a closure; the owner drains the
//! events that are due and dispatches them itself. After `cancel_all` no
//! previously scheduled event can ever be drained.

use crate::Millis;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    deadline: Millis,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    next_id: u64,
    pending: Vec<Entry<E>>,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Fire `event` once `delay` ms have passed since `now`.
    pub fn schedule(&mut self, now: Millis, delay: Millis, event: E) -> TimerId {
        self.schedule_at(now.saturating_add(delay), event)
    }

    pub fn schedule_at(&mut self, deadline: Millis, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            id,
            deadline,
            event,
        });
        id
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline, for hosts that sleep between frames.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.iter().map(|e| e.deadline).min()
    }

    /// Remove and return every event whose deadline is `<= now`, ordered by
    /// deadline and then by scheduling order.
    pub fn drain_due(&mut self, now: Millis) -> Vec<(Millis, E)> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                keep.push(entry);
            }
        }
        self.pending = keep;
        due.sort_by_key(|e| (e.deadline, e.id));
        due.into_iter().map(|e| (e.deadline, e.event)).collect()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
