//! Sub-interval tasks and the task sequence shared by workers.

use std::ops::Index;

use crate::domain::Domain;
use crate::error::{QuadError, QuadResult};

/// Position of a task inside a [`TaskSequence`].
pub type TaskIndex = usize;

/// One sub-interval of the domain with its own local error budget.
///
/// Immutable once created. `lower < upper` and `error_budget > 0` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalTask {
    lower: f64,
    upper: f64,
    error_budget: f64,
}

impl IntervalTask {
    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::InvalidTask`] if `lower >= upper` or the budget is
    /// not strictly positive (NaN in any field is rejected as well).
    pub fn new(lower: f64, upper: f64, error_budget: f64) -> QuadResult<Self> {
        if lower < upper && error_budget > 0.0 {
            Ok(Self {
                lower,
                upper,
                error_budget,
            })
        } else {
            Err(QuadError::InvalidTask {
                lower,
                upper,
                error_budget,
            })
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Local error budget handed to the kernel.
    #[must_use]
    pub fn error_budget(&self) -> f64 {
        self.error_budget
    }

    /// `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// An ordered partition of a domain into contiguous tasks.
///
/// Built once before any worker starts and never resized afterwards; workers
/// only ever see it through a shared slice.
#[derive(Clone, Debug)]
pub struct TaskSequence {
    domain: Domain,
    tasks: Vec<IntervalTask>,
}

impl TaskSequence {
    /// Wraps tasks that partition `domain`.
    ///
    /// The caller is responsible for contiguity; see
    /// [`TaskSequence::is_partition_of_domain`] for a check.
    #[must_use]
    pub fn new(domain: Domain, tasks: Vec<IntervalTask>) -> Self {
        Self { domain, tasks }
    }

    /// The domain the tasks cover.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view handed to workers.
    #[must_use]
    pub fn as_slice(&self) -> &[IntervalTask] {
        &self.tasks
    }

    /// Iterates over tasks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, IntervalTask> {
        self.tasks.iter()
    }

    /// Task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: TaskIndex) -> Option<&IntervalTask> {
        self.tasks.get(index)
    }

    /// Sum of task widths.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.tasks.iter().map(IntervalTask::width).sum()
    }

    /// Sum of task error budgets.
    #[must_use]
    pub fn total_error_budget(&self) -> f64 {
        self.tasks.iter().map(IntervalTask::error_budget).sum()
    }

    /// Checks that tasks start at `a`, end at `b` and touch without gaps or
    /// overlaps.
    #[must_use]
    pub fn is_partition_of_domain(&self) -> bool {
        let (Some(first), Some(last)) = (self.tasks.first(), self.tasks.last()) else {
            return false;
        };
        #[allow(clippy::float_cmp)]
        let bounds_match =
            first.lower == self.domain.lower() && last.upper == self.domain.upper();
        #[allow(clippy::float_cmp)]
        let contiguous = self.tasks.windows(2).all(|w| w[0].upper == w[1].lower);
        bounds_match && contiguous
    }
}

impl Index<TaskIndex> for TaskSequence {
    type Output = IntervalTask;

    fn index(&self, index: TaskIndex) -> &IntervalTask {
        &self.tasks[index]
    }
}

impl<'a> IntoIterator for &'a TaskSequence {
    type Item = &'a IntervalTask;
    type IntoIter = std::slice::Iter<'a, IntervalTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
