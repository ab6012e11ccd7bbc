//! Plain-text rendering of a run.
//!
//! The engine returns structured data only; this module turns a
//! [`RunOutcome`] into the human readable summary printed by the binary.
//! Per-worker times are shown in milliseconds.

use std::fmt;

use parquad_parallel::{LoadBalance, RunOutcome};

/// Display adapter for a finished run.
#[derive(Clone, Copy, Debug)]
pub struct Summary<'a> {
    outcome: &'a RunOutcome,
}

impl<'a> Summary<'a> {
    /// Wraps a run outcome for display.
    #[must_use]
    pub fn new(outcome: &'a RunOutcome) -> Self {
        Self { outcome }
    }

    fn write_workers(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for worker in &self.outcome.workers {
            writeln!(
                f,
                "THREAD_TIME_MS: {} {:.3} (tasks={}, evaluations={})",
                worker.worker_id,
                worker.active_millis(),
                worker.tasks_completed,
                worker.evaluations
            )?;
        }
        Ok(())
    }

    fn write_balance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = &self.outcome.result;
        match result.balance {
            LoadBalance::NotApplicable => writeln!(
                f,
                "Load Balancing ({}): N/A for single thread.",
                result.signal.label()
            ),
            spread @ LoadBalance::Spread { .. } => {
                writeln!(f, "Load Balancing ({}): {spread}", result.signal.label())
            }
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;
        writeln!(
            f,
            "Integrating over [{}, {}] with {} threads, epsilon: {:e}, tasks: {}",
            outcome.domain.lower(),
            outcome.domain.upper(),
            outcome.worker_count(),
            outcome.tolerance,
            outcome.task_count
        )?;
        self.write_workers(f)?;
        self.write_balance(f)?;
        writeln!(f, "Integral result: {:.10}", outcome.result.integral)?;
        writeln!(
            f,
            "Total function evaluations: {}",
            outcome.result.total_evaluations
        )?;
        if outcome.result.depth_capped > 0 {
            writeln!(
                f,
                "Depth-capped panels: {}",
                outcome.result.depth_capped
            )?;
        }
        write!(
            f,
            "Total Wall Time ({} thr): {:.3} ms",
            outcome.worker_count(),
            outcome.wall_time.as_secs_f64() * 1e3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquad_core::BuiltinIntegrand;
    use parquad_parallel::{EngineConfig, ParallelIntegrator};

    fn outcome(workers: usize) -> RunOutcome {
        ParallelIntegrator::new(
            EngineConfig::default()
                .with_workers(workers)
                .with_tolerance(1e-6)
                .with_domain(0.0, 1.0)
                .with_task_count(10),
        )
        .unwrap()
        .run(&BuiltinIntegrand::Identity)
        .unwrap()
    }

    #[test]
    fn test_single_worker_summary() {
        let text = Summary::new(&outcome(1)).to_string();
        assert!(text.contains("with 1 threads"));
        assert!(text.contains("THREAD_TIME_MS: 0 "));
        assert!(text.contains("Load Balancing (Time_ms): N/A for single thread."));
        assert!(text.contains("Integral result: 0.5000000000"));
        assert!(text.contains("Total function evaluations: 30"));
        assert!(text.contains("Total Wall Time (1 thr): "));
        assert!(!text.contains("Depth-capped"));
    }

    #[test]
    fn test_multi_worker_summary() {
        let text = Summary::new(&outcome(3)).to_string();
        assert_eq!(text.matches("THREAD_TIME_MS:").count(), 3);
        assert!(text.contains("Load Balancing (Time_ms): Min="));
        assert!(text.contains("Spread="));
    }
}
