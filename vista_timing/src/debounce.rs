// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed replace-or-schedule queue.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

#[derive(Clone, Debug)]
struct Pending<T> {
    deadline: u64,
    /// Scheduling order, used to break deadline ties in [`Debouncer::poll`].
    seq: u64,
    task: T,
}

/// Delayed tasks keyed by `K`, at most one pending task per key.
///
/// Times are `u64` milliseconds supplied by the caller; deadline arithmetic
/// saturates instead of wrapping.
#[derive(Clone, Debug)]
pub struct Debouncer<K, T> {
    pending: HashMap<K, Pending<T>>,
    next_seq: u64,
}

impl<K, T> Debouncer<K, T>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Schedules `task` under `key` to fire at `now + delay`.
    ///
    /// Any task already pending under `key` is canceled and returned; its
    /// deadline does not carry over.
    pub fn schedule(&mut self, key: K, task: T, now: u64, delay: u64) -> Option<T> {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        let pending = Pending {
            deadline: now.saturating_add(delay),
            seq,
            task,
        };
        self.pending.insert(key, pending).map(|old| old.task)
    }

    /// Cancels the task pending under `key`, returning it.
    pub fn cancel(&mut self, key: &K) -> Option<T> {
        self.pending.remove(key).map(|p| p.task)
    }

    /// Removes and returns every task whose deadline is at or before `now`.
    ///
    /// Tasks are returned in deadline order; ties keep scheduling order.
    pub fn poll(&mut self, now: u64) -> Vec<(K, T)> {
        let mut due: Vec<(u64, u64, K)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, p)| (p.deadline, p.seq, k.clone()))
            .collect();
        if due.is_empty() {
            return Vec::new();
        }
        due.sort_unstable_by_key(|(deadline, seq, _)| (*deadline, *seq));
        due.into_iter()
            .filter_map(|(_, _, key)| {
                let pending = self.pending.remove(&key)?;
                Some((key, pending.task))
            })
            .collect()
    }

    /// Removes and returns every pending task regardless of deadline.
    ///
    /// Used on shutdown paths to flush work early. Order matches
    /// [`Debouncer::poll`].
    pub fn drain(&mut self) -> Vec<(K, T)> {
        let mut all: Vec<(K, Pending<T>)> = self.pending.drain().collect();
        all.sort_unstable_by_key(|(_, p)| (p.deadline, p.seq));
        all.into_iter().map(|(k, p)| (k, p.task)).collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Deadline of the task pending under `key`.
    #[must_use]
    pub fn deadline(&self, key: &K) -> Option<u64> {
        self.pending.get(key).map(|p| p.deadline)
    }

    /// Returns `true` if a task is pending under `key`.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K, T> Default for Debouncer<K, T>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Debouncer;

    #[test]
    fn schedule_replaces_and_returns_previous_task() {
        let mut q = Debouncer::new();
        assert_eq!(q.schedule(1_u8, "a", 0, 100), None);
        assert_eq!(q.schedule(1_u8, "b", 50, 100), Some("a"));
        assert_eq!(q.len(), 1);
        assert_eq!(q.deadline(&1), Some(150));
    }

    #[test]
    fn task_fires_exactly_at_deadline() {
        let mut q = Debouncer::new();
        q.schedule((), 7, 10, 150);
        assert!(q.poll(159).is_empty());
        assert_eq!(q.poll(160), vec![((), 7)]);
        assert!(q.poll(1_000).is_empty());
    }

    #[test]
    fn keys_are_independent() {
        let mut q = Debouncer::new();
        q.schedule("a", 1, 0, 500);
        q.schedule("b", 2, 100, 500);
        q.schedule("a", 3, 200, 500);

        assert_eq!(q.poll(600), vec![("b", 2)]);
        assert_eq!(q.poll(700), vec![("a", 3)]);
    }

    #[test]
    fn poll_orders_by_deadline_then_schedule_order() {
        let mut q = Debouncer::new();
        q.schedule(3, 'c', 0, 20);
        q.schedule(1, 'a', 0, 10);
        q.schedule(2, 'b', 0, 10);
        assert_eq!(q.poll(100), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn cancel_removes_pending_task() {
        let mut q = Debouncer::new();
        q.schedule("k", 1, 0, 10);
        assert_eq!(q.cancel(&"k"), Some(1));
        assert_eq!(q.cancel(&"k"), None);
        assert!(q.poll(100).is_empty());
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn drain_ignores_deadlines() {
        let mut q = Debouncer::new();
        q.schedule("late", 2, 0, 1_000);
        q.schedule("soon", 1, 0, 10);
        assert_eq!(q.drain(), vec![("soon", 1), ("late", 2)]);
        assert!(q.is_empty());
    }

    #[test]
    fn deadline_saturates_instead_of_wrapping() {
        let mut q = Debouncer::new();
        q.schedule((), (), u64::MAX - 5, 500);
        assert_eq!(q.next_deadline(), Some(u64::MAX));
    }
}
