//! Splitting a domain into independently integrable tasks.
//!
//! The domain is cut into equal-width sub-intervals and each one receives an
//! error budget proportional to its width. Summing locally achieved errors is
//! a heuristic; it does not bound the global error rigorously because the
//! kernel's own acceptance test is heuristic.

use parquad_core::{Domain, IntervalTask, QuadError, QuadResult, TaskSequence};

/// Lower bound on the default task count.
pub const MIN_TASK_COUNT: usize = 100;

/// Tasks generated per worker by default, so that no single slow task
/// dominates a worker's share.
pub const TASKS_PER_WORKER: usize = 500;

/// Default target task count for `workers` workers: `max(100, workers * 500)`.
#[must_use]
pub fn default_task_count(workers: usize) -> usize {
    MIN_TASK_COUNT.max(workers.saturating_mul(TASKS_PER_WORKER))
}

/// Checks that `tolerance` split over `task_count` tasks leaves every task a
/// usable error budget.
///
/// # Errors
///
/// Returns [`QuadError::InvalidTolerance`] for a non-positive or non-finite
/// tolerance, or one whose per-task share is not a normal float, and
/// [`QuadError::InvalidTaskCount`] when `task_count` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn check_budget(tolerance: f64, task_count: usize) -> QuadResult<()> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(QuadError::InvalidTolerance(tolerance));
    }
    if task_count == 0 {
        return Err(QuadError::InvalidTaskCount);
    }
    if !(tolerance / task_count as f64).is_normal() {
        return Err(QuadError::InvalidTolerance(tolerance));
    }
    Ok(())
}

/// Partitions `domain` into `target_task_count` contiguous tasks.
///
/// The last task ends exactly at the upper bound, absorbing any rounding
/// remainder. Task `i` receives the budget
/// `tolerance * width_i / (b - a)`. A numerically negligible domain yields a
/// single task carrying the full tolerance.
///
/// # Errors
///
/// Returns the errors of [`check_budget`], and
/// [`QuadError::InvalidDomain`] if no non-empty slice survives rounding.
#[allow(clippy::cast_precision_loss)]
pub fn decompose(
    domain: Domain,
    tolerance: f64,
    target_task_count: usize,
) -> QuadResult<TaskSequence> {
    check_budget(tolerance, target_task_count)?;

    let (a, b) = (domain.lower(), domain.upper());
    if domain.is_negligible() {
        let task = IntervalTask::new(a, b, tolerance)?;
        return Ok(TaskSequence::new(domain, vec![task]));
    }

    let total = domain.width();
    let dx = total / target_task_count as f64;
    let last = target_task_count - 1;

    let mut tasks = Vec::with_capacity(target_task_count);
    for i in 0..target_task_count {
        let lower = a + i as f64 * dx;
        let upper = if i == last {
            b
        } else {
            (a + (i + 1) as f64 * dx).min(b)
        };
        // Rounding can collapse a slice when dx is tiny relative to a.
        if lower < upper {
            tasks.push(IntervalTask::new(
                lower,
                upper,
                tolerance * ((upper - lower) / total),
            )?);
        }
    }

    if tasks.is_empty() {
        return Err(QuadError::InvalidDomain { a, b });
    }
    Ok(TaskSequence::new(domain, tasks))
}
