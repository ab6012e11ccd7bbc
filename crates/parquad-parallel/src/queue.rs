//! The shared work queue.
//!
//! A read cursor over an immutable task slice. Claiming is one atomic
//! fetch-and-increment, wait-free and never blocking. Every index below the
//! task count is returned exactly once across all callers; afterwards every
//! claim returns `None`.

use std::sync::atomic::{AtomicUsize, Ordering};

use parquad_core::{IntervalTask, TaskIndex};

/// Monotonic claim cursor over a task slice.
#[derive(Debug)]
pub struct WorkQueue<'a> {
    tasks: &'a [IntervalTask],
    cursor: AtomicUsize,
}

impl<'a> WorkQueue<'a> {
    /// Creates a queue positioned at the first task.
    #[must_use]
    pub fn new(tasks: &'a [IntervalTask]) -> Self {
        Self {
            tasks,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Claims the next unclaimed index, or `None` once the queue is exhausted.
    pub fn claim(&self) -> Option<TaskIndex> {
        // Tasks are published before the queue is shared, so the cursor only
        // has to be unique, not ordered with other memory.
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        (index < self.tasks.len()).then_some(index)
    }

    /// Claims the next task together with its index.
    pub fn next_task(&self) -> Option<(TaskIndex, &'a IntervalTask)> {
        self.claim().map(|i| (i, &self.tasks[i]))
    }

    /// Total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the queue was built over no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks handed out so far.
    #[must_use]
    pub fn claimed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed).min(self.tasks.len())
    }

    /// Returns true once every task has been handed out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.claimed() == self.tasks.len()
    }
}
