//! Engine configuration.

use std::num::NonZeroUsize;

use parquad_core::{Domain, QuadError, QuadResult};
use parquad_integrate::{check_budget, default_task_count, DEFAULT_MAX_DEPTH};

use crate::aggregate::BalanceSignal;

/// Configuration for a parallel integration run.
///
/// Every field is checked by [`EngineConfig::validate`] before any task is
/// built or any thread is started.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Number of worker threads in the fixed pool.
    pub workers: usize,
    /// Global error tolerance, split across tasks by width.
    pub tolerance: f64,
    /// Lower bound of the domain.
    pub lower: f64,
    /// Upper bound of the domain.
    pub upper: f64,
    /// Number of tasks; `None` means `max(100, workers * 500)`.
    pub task_count: Option<usize>,
    /// Recursion ceiling of the kernel.
    pub max_depth: u32,
    /// Signal the load-balance figure is computed over.
    pub balance_signal: BalanceSignal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
            tolerance: 1e-8,
            lower: 0.01,
            upper: 2.0,
            task_count: None,
            max_depth: DEFAULT_MAX_DEPTH,
            balance_signal: BalanceSignal::ActiveTime,
        }
    }
}

impl EngineConfig {
    /// Sets the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the global tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the domain bounds.
    #[must_use]
    pub fn with_domain(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Overrides the task count.
    #[must_use]
    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = Some(task_count);
        self
    }

    /// Sets the kernel's recursion ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the load-balance signal.
    #[must_use]
    pub fn with_balance_signal(mut self, signal: BalanceSignal) -> Self {
        self.balance_signal = signal;
        self
    }

    /// Task count that will be used for this configuration.
    #[must_use]
    pub fn effective_task_count(&self) -> usize {
        self.task_count
            .unwrap_or_else(|| default_task_count(self.workers))
    }

    /// Checks every parameter and returns the validated domain.
    ///
    /// # Errors
    ///
    /// Returns the first [`QuadError`] found: worker count, tolerance,
    /// domain, task count, per-task budget, then depth.
    pub fn validate(&self) -> QuadResult<Domain> {
        if self.workers == 0 {
            return Err(QuadError::InvalidWorkerCount(self.workers));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(QuadError::InvalidTolerance(self.tolerance));
        }
        let domain = Domain::new(self.lower, self.upper)?;
        if self.task_count == Some(0) {
            return Err(QuadError::InvalidTaskCount);
        }
        check_budget(self.tolerance, self.effective_task_count())?;
        if self.max_depth == 0 {
            return Err(QuadError::InvalidDepth);
        }
        Ok(domain)
    }
}
