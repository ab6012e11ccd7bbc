//! Run orchestration.
//!
//! A run validates its configuration, decomposes the domain on the calling
//! thread, starts a fixed pool of `workers` threads, lets every pool thread
//! drain the shared [`WorkQueue`], joins them, and aggregates. No thread is
//! created or destroyed while the queue is being drained, and there is no
//! cancellation: a run always reduces the whole task sequence. A panicking
//! integrand aborts the run by unwinding out of [`ParallelIntegrator::run`].

use std::time::{Duration, Instant};

use parquad_core::{Domain, Integrand, QuadError, QuadResult, TaskSequence};
use parquad_integrate::{decompose, AdaptiveTrapezoid};
use rayon::ThreadPoolBuilder;
use tracing::info_span;

use crate::aggregate::{aggregate, AggregateResult};
use crate::config::EngineConfig;
use crate::queue::WorkQueue;
use crate::worker::{Worker, WorkerResult};

/// Everything a run hands to its reporting collaborators.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Aggregated estimate and balance statistics.
    pub result: AggregateResult,
    /// Raw per-worker results, in pool order.
    pub workers: Vec<WorkerResult>,
    /// Domain that was integrated.
    pub domain: Domain,
    /// Global tolerance requested.
    pub tolerance: f64,
    /// Number of tasks in the sequence.
    pub task_count: usize,
    /// Wall time from decomposition (or pool start, for prepared tasks) to
    /// aggregation.
    pub wall_time: Duration,
}

impl RunOutcome {
    /// The integral estimate.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.result.integral
    }

    /// Number of workers that ran.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

/// Parallel adaptive-quadrature engine.
///
/// # Example
///
/// ```
/// use parquad_parallel::{EngineConfig, ParallelIntegrator};
///
/// let config = EngineConfig::default()
///     .with_workers(4)
///     .with_tolerance(1e-6)
///     .with_domain(0.0, 1.0);
/// let engine = ParallelIntegrator::new(config).unwrap();
/// let outcome = engine.run(&|x: f64| x).unwrap();
/// assert!((outcome.integral() - 0.5).abs() < 1e-5);
/// ```
#[derive(Clone, Debug)]
pub struct ParallelIntegrator {
    config: EngineConfig,
    domain: Domain,
    kernel: AdaptiveTrapezoid,
}

impl ParallelIntegrator {
    /// Validates `config` and builds the engine.
    ///
    /// # Errors
    ///
    /// Returns the [`QuadError`] reported by [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> QuadResult<Self> {
        let domain = config.validate()?;
        let kernel = AdaptiveTrapezoid::new(config.max_depth)?;
        Ok(Self {
            config,
            domain,
            kernel,
        })
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The kernel every worker uses.
    #[must_use]
    pub fn kernel(&self) -> &AdaptiveTrapezoid {
        &self.kernel
    }

    /// Builds the task sequence this engine would reduce.
    ///
    /// # Errors
    ///
    /// Propagates [`decompose`] errors, such as a partition in which every
    /// slice collapsed under rounding.
    pub fn decompose(&self) -> QuadResult<TaskSequence> {
        decompose(
            self.domain,
            self.config.tolerance,
            self.config.effective_task_count(),
        )
    }

    /// Integrates `f` over the configured domain.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::ThreadPool`] if the worker pool cannot start.
    pub fn run<F>(&self, f: &F) -> QuadResult<RunOutcome>
    where
        F: Integrand + ?Sized,
    {
        let started = Instant::now();
        let tasks = self.decompose()?;
        self.reduce(&tasks, f, started)
    }

    /// Reduces an already decomposed task sequence.
    ///
    /// The same sequence can be reduced with different worker counts; the
    /// estimates agree up to floating-point reassociation.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::ThreadPool`] if the worker pool cannot start.
    pub fn run_tasks<F>(&self, tasks: &TaskSequence, f: &F) -> QuadResult<RunOutcome>
    where
        F: Integrand + ?Sized,
    {
        self.reduce(tasks, f, Instant::now())
    }

    fn reduce<F>(&self, tasks: &TaskSequence, f: &F, started: Instant) -> QuadResult<RunOutcome>
    where
        F: Integrand + ?Sized,
    {
        let span = info_span!(
            "parquad_run",
            workers = self.config.workers,
            tasks = tasks.len(),
            tolerance = self.config.tolerance,
        );
        let _enter = span.enter();

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| format!("parquad-worker-{i}"))
            .build()
            .map_err(|e| QuadError::ThreadPool(e.to_string()))?;

        let queue = WorkQueue::new(tasks.as_slice());
        let kernel = self.kernel;

        // broadcast runs the closure once on every pool thread and returns
        // only after all of them have finished: this is the join barrier.
        let workers: Vec<WorkerResult> = pool.broadcast(|ctx| {
            span.in_scope(|| Worker::new(ctx.index()).run(&queue, f, &kernel))
        });
        debug_assert!(queue.is_exhausted());

        let result = aggregate(&workers, self.config.balance_signal);

        Ok(RunOutcome {
            result,
            workers,
            domain: tasks.domain(),
            tolerance: self.config.tolerance,
            task_count: tasks.len(),
            wall_time: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquad_core::BuiltinIntegrand;

    #[test]
    fn test_rejects_invalid_config_before_running() {
        let config = EngineConfig::default().with_workers(0);
        assert_eq!(
            ParallelIntegrator::new(config).unwrap_err(),
            QuadError::InvalidWorkerCount(0)
        );
    }

    #[test]
    fn test_overflowing_domain_is_rejected() {
        let config = EngineConfig::default()
            .with_workers(2)
            .with_tolerance(1.0)
            .with_domain(-1e308, 1e308)
            .with_task_count(10);
        assert_eq!(
            ParallelIntegrator::new(config).unwrap_err(),
            QuadError::InvalidDomain { a: -1e308, b: 1e308 }
        );
    }

    #[test]
    fn test_subnormal_task_budget_is_rejected_up_front() {
        let config = EngineConfig::default()
            .with_workers(2)
            .with_tolerance(1e-320)
            .with_domain(0.0, 1.0)
            .with_task_count(100_000);
        assert_eq!(
            ParallelIntegrator::new(config).unwrap_err(),
            QuadError::InvalidTolerance(1e-320)
        );
    }

    #[test]
    fn test_one_result_per_worker() {
        let config = EngineConfig::default()
            .with_workers(3)
            .with_tolerance(1e-6)
            .with_domain(0.0, 1.0)
            .with_task_count(300);
        let outcome = ParallelIntegrator::new(config)
            .unwrap()
            .run(&BuiltinIntegrand::Square)
            .unwrap();

        assert_eq!(outcome.worker_count(), 3);
        assert_eq!(outcome.task_count, 300);
        assert_eq!(outcome.result.total_tasks(), 300);
        let ids: Vec<_> = outcome.workers.iter().map(|w| w.worker_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!((outcome.integral() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluations_add_up() {
        let config = EngineConfig::default()
            .with_workers(2)
            .with_domain(0.0, 1.0)
            .with_task_count(64);
        let outcome = ParallelIntegrator::new(config)
            .unwrap()
            .run(&|x: f64| 3.0 * x)
            .unwrap();
        // Linear integrand: three evaluations per task.
        assert_eq!(outcome.result.total_evaluations, 192);
        let per_worker: u64 = outcome.result.per_worker_evaluations.iter().sum();
        assert_eq!(per_worker, 192);
    }

    #[test]
    #[should_panic(expected = "integrand failure")]
    fn test_panicking_integrand_aborts_run() {
        let config = EngineConfig::default()
            .with_workers(2)
            .with_domain(0.0, 1.0)
            .with_task_count(10);
        let engine = ParallelIntegrator::new(config).unwrap();
        let _ = engine.run(&|x: f64| -> f64 {
            if x > 0.5 {
                panic!("integrand failure");
            }
            x
        });
    }
}
