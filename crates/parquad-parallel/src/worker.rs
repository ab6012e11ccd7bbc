//! The per-thread claim-and-integrate loop.
//!
//! A worker moves `Idle -> Claiming -> Computing -> Idle` until a claim comes
//! back empty, then reaches `Done` exactly once. It never retries a task and
//! never re-claims an index. Its running totals are private; they are
//! published by value when the loop ends.

use std::time::{Duration, Instant};

use parquad_core::Integrand;
use parquad_integrate::{AdaptiveTrapezoid, KernelEstimate};
use tracing::debug;

use crate::queue::WorkQueue;

/// What one worker contributed to a run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorkerResult {
    /// Index of the worker inside the pool.
    pub worker_id: usize,
    /// Sum of the estimates of every task this worker reduced.
    pub partial_sum: f64,
    /// Integrand evaluations performed by this worker.
    pub evaluations: u64,
    /// Panels this worker accepted at the depth ceiling or on collapse.
    pub depth_capped: u64,
    /// Tasks claimed and reduced.
    pub tasks_completed: usize,
    /// Wall time from the worker's first claim to its last.
    pub active: Duration,
}

impl WorkerResult {
    /// Active time in microseconds.
    #[must_use]
    pub fn active_micros(&self) -> f64 {
        self.active.as_secs_f64() * 1e6
    }

    /// Active time in milliseconds.
    #[must_use]
    pub fn active_millis(&self) -> f64 {
        self.active.as_secs_f64() * 1e3
    }
}

/// A unit of concurrent execution draining a [`WorkQueue`].
#[derive(Clone, Copy, Debug)]
pub struct Worker {
    id: usize,
}

impl Worker {
    /// Creates the worker with pool index `id`.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self { id }
    }

    /// Pool index.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Claims and integrates tasks until the queue is exhausted.
    pub fn run<F>(&self, queue: &WorkQueue<'_>, f: &F, kernel: &AdaptiveTrapezoid) -> WorkerResult
    where
        F: Integrand + ?Sized,
    {
        let started = Instant::now();
        let mut local = KernelEstimate::default();
        let mut tasks_completed = 0;

        while let Some((_, task)) = queue.next_task() {
            local.absorb(kernel.integrate(f, task.lower(), task.upper(), task.error_budget()));
            tasks_completed += 1;
        }

        let result = WorkerResult {
            worker_id: self.id,
            partial_sum: local.value,
            evaluations: local.evaluations,
            depth_capped: local.depth_capped,
            tasks_completed,
            active: started.elapsed(),
        };

        debug!(
            worker = self.id,
            tasks = tasks_completed,
            evaluations = local.evaluations,
            depth_capped = local.depth_capped,
            active_ms = result.active_millis(),
            "worker done"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquad_core::Domain;
    use parquad_integrate::decompose;

    #[test]
    fn test_single_worker_drains_queue() {
        let tasks = decompose(Domain::new(0.0, 1.0).unwrap(), 1e-6, 50).unwrap();
        let queue = WorkQueue::new(tasks.as_slice());
        let result = Worker::new(3).run(&queue, &|x: f64| x, &AdaptiveTrapezoid::default());

        assert_eq!(result.worker_id, 3);
        assert_eq!(result.tasks_completed, 50);
        assert_eq!(result.evaluations, 150);
        assert!((result.partial_sum - 0.5).abs() < 1e-14);
        assert!(queue.is_exhausted());
    }

    #[test]
    fn test_worker_on_exhausted_queue() {
        let tasks = decompose(Domain::new(0.0, 1.0).unwrap(), 1e-6, 5).unwrap();
        let queue = WorkQueue::new(tasks.as_slice());
        while queue.claim().is_some() {}

        let result = Worker::new(0).run(&queue, &|x: f64| x, &AdaptiveTrapezoid::default());
        assert_eq!(result.tasks_completed, 0);
        assert_eq!(result.evaluations, 0);
        assert_eq!(result.partial_sum, 0.0);
    }

    #[test]
    fn test_time_units() {
        let result = WorkerResult {
            active: Duration::from_millis(3),
            ..WorkerResult::default()
        };
        assert!((result.active_millis() - 3.0).abs() < 1e-9);
        assert!((result.active_micros() - 3000.0).abs() < 1e-6);
    }
}
