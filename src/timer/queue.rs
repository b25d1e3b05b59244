use std::{
    cmp::Ordering,
    collections::{BTreeSet, BinaryHeap},
};

use crate::foundation::core::Millis;

/// Handle to a scheduled timer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerId(pub u64);

/// A timer that came due.
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<E> {
    /// Timer that fired.
    pub id: TimerId,
    /// Scheduled instant (not the instant the queue was polled).
    pub due: Millis,
    /// Payload supplied at scheduling time.
    pub event: E,
}

struct Entry<E> {
    due: Millis,
    seq: u64,
    id: TimerId,
    period_ms: Option<u64>,
    event: E,
}

// BinaryHeap is a max-heap; invert so the earliest (due, seq) pops first.
impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

/// Single-threaded cooperative timer queue on a virtual clock.
///
/// Timers fire in `(due, scheduling order)` order. Periodic timers re-arm at
/// `due + period` each time they fire, so a slow poller never loses ticks. A periodic
/// timer whose next instant would pass the end of the clock fires one last time and retires.
/// Cancellation is lazy: cancelled entries stay in the heap and are skipped on pop.
pub struct TimerQueue<E> {
    heap: BinaryHeap<Entry<E>>,
    live: BTreeSet<TimerId>,
    next_id: u64,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: BTreeSet::new(),
            next_id: 1,
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire once at `due`.
    pub fn schedule_once(&mut self, due: Millis, event: E) -> TimerId {
        self.push_new(due, None, event)
    }

    /// Schedule `event` to fire at `first_due` and every `period_ms` after that.
    ///
    /// A zero period is treated as one millisecond so the queue always makes progress.
    pub fn schedule_every(&mut self, first_due: Millis, period_ms: u64, event: E) -> TimerId {
        self.push_new(first_due, Some(period_ms.max(1)), event)
    }

    /// Cancel a timer. Returns `false` if it was unknown, already fired, or cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.live.remove(&id)
    }

    /// Whether `id` is still pending.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.live.contains(&id)
    }

    /// Number of pending timers (periodic timers count once).
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Earliest pending due instant.
    pub fn next_due(&mut self) -> Option<Millis> {
        self.discard_cancelled();
        self.heap.peek().map(|e| e.due)
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }

    fn push_new(&mut self, due: Millis, period_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        self.push_entry(due, id, period_ms, event);
        id
    }

    fn push_entry(&mut self, due: Millis, id: TimerId, period_ms: Option<u64>, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            due,
            seq,
            id,
            period_ms,
            event,
        });
    }

    fn discard_cancelled(&mut self) {
        while let Some(top) = self.heap.peek() {
            if self.live.contains(&top.id) {
                break;
            }
            self.heap.pop();
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    /// Pop the earliest timer due at or before `now`, re-arming it if periodic.
    pub fn pop_due(&mut self, now: Millis) -> Option<Fired<E>> {
        self.discard_cancelled();
        if self.heap.peek()?.due > now {
            return None;
        }
        let entry = self.heap.pop()?;
        let rearm = entry
            .period_ms
            .and_then(|period| entry.due.checked_after(period).map(|next| (next, period)));
        match rearm {
            Some((next, period)) => {
                self.push_entry(next, entry.id, Some(period), entry.event.clone());
            }
            None => {
                self.live.remove(&entry.id);
            }
        }
        Some(Fired {
            id: entry.id,
            due: entry.due,
            event: entry.event,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timer/queue.rs"]
mod tests;
