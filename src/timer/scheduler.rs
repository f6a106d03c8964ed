//! src/timer/scheduler.rs
//!
//! Deadline-ordered delayed tasks with cancellation by handle.
//!
//! Tasks are plain data rather than closures: the owner pops whatever is due
//! and interprets it, which keeps borrowing simple and makes time advancement
//! fully deterministic under a fake clock.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Opaque handle to a scheduled task. Ids are never reused, so a handle that
/// has fired or been cancelled can never match a later task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// A task popped from the queue together with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due<T> {
    pub handle: TaskHandle,
    pub deadline: Duration,
    pub task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    /// keyed by (deadline, id) so equal deadlines pop in scheduling order
    queue: BTreeMap<(Duration, u64), T>,
    /// id -> deadline, for O(log n) cancellation
    deadlines: HashMap<u64, Duration>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Arm `task` to become due at `deadline`.
    pub fn schedule_at(&mut self, deadline: Duration, task: T) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);
        TaskHandle(id)
    }

    /// Cancel a pending task. Returns `false` (and does nothing) when the
    /// handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the earliest task whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Due<T>> {
        let (&(deadline, id), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        let task = self.queue.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        Some(Due {
            handle: TaskHandle(id),
            deadline,
            task,
        })
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
