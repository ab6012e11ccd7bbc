//! Post-join reduction of worker results.
//!
//! Runs only after every worker has been joined; the join is the
//! happens-before edge that makes each worker's result visible here.
//! The load-balance figure is diagnostic and never feeds back into
//! scheduling.

use std::fmt;
use std::time::Duration;

use tracing::info;

use crate::worker::WorkerResult;

/// Means at or below this (in the signal's unit) report zero spread.
pub const NEGLIGIBLE_MEAN: f64 = 1e-6;

/// Which per-worker measurement the load-balance figure is computed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BalanceSignal {
    /// Active wall time, in milliseconds.
    #[default]
    ActiveTime,
    /// Integrand evaluation count.
    Evaluations,
}

impl BalanceSignal {
    /// Short label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BalanceSignal::ActiveTime => "Time_ms",
            BalanceSignal::Evaluations => "Evaluations",
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample(self, result: &WorkerResult) -> f64 {
        match self {
            BalanceSignal::ActiveTime => result.active_millis(),
            BalanceSignal::Evaluations => result.evaluations as f64,
        }
    }
}

/// Relative spread between the most and least loaded worker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadBalance {
    /// Fewer than two workers ran; no spread is meaningful.
    NotApplicable,
    /// Spread over two or more workers.
    Spread {
        /// Smallest sample.
        min: f64,
        /// Largest sample.
        max: f64,
        /// Arithmetic mean.
        mean: f64,
        /// `(max - min) / mean * 100`, or `0` when the mean is negligible.
        spread_percent: f64,
    },
}

impl LoadBalance {
    /// Computes the spread of `samples`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.len() < 2 {
            return LoadBalance::NotApplicable;
        }

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let spread_percent = if mean > NEGLIGIBLE_MEAN {
            (max - min) / mean * 100.0
        } else {
            0.0
        };

        LoadBalance::Spread {
            min,
            max,
            mean,
            spread_percent,
        }
    }

    /// The spread percentage, if applicable.
    #[must_use]
    pub fn spread_percent(&self) -> Option<f64> {
        match self {
            LoadBalance::NotApplicable => None,
            LoadBalance::Spread { spread_percent, .. } => Some(*spread_percent),
        }
    }
}

impl fmt::Display for LoadBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadBalance::NotApplicable => write!(f, "N/A"),
            LoadBalance::Spread {
                min,
                max,
                mean,
                spread_percent,
            } => write!(
                f,
                "Min={min:.3}, Max={max:.3}, Avg={mean:.3}, Spread={spread_percent:.2}%"
            ),
        }
    }
}

/// Final, read-only result of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateResult {
    /// Sum of all partial sums.
    pub integral: f64,
    /// Sum of all evaluation counts.
    pub total_evaluations: u64,
    /// Panels accepted at the depth ceiling or on collapse, across workers.
    pub depth_capped: u64,
    /// Active time per worker, in pool order.
    pub per_worker_times: Vec<Duration>,
    /// Evaluations per worker, in pool order.
    pub per_worker_evaluations: Vec<u64>,
    /// Tasks per worker, in pool order.
    pub per_worker_tasks: Vec<usize>,
    /// Signal the balance figure was computed over.
    pub signal: BalanceSignal,
    /// Load-balance diagnostic.
    pub balance: LoadBalance,
}

impl AggregateResult {
    /// Number of workers that contributed.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.per_worker_times.len()
    }

    /// Total number of tasks reduced.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.per_worker_tasks.iter().sum()
    }
}

/// Combines joined worker results, in pool order.
#[must_use]
pub fn aggregate(results: &[WorkerResult], signal: BalanceSignal) -> AggregateResult {
    let integral: f64 = results.iter().map(|r| r.partial_sum).sum();
    let total_evaluations: u64 = results.iter().map(|r| r.evaluations).sum();
    let depth_capped: u64 = results.iter().map(|r| r.depth_capped).sum();

    let samples: Vec<f64> = results.iter().map(|r| signal.sample(r)).collect();
    let balance = LoadBalance::from_samples(&samples);

    info!(
        integral,
        total_evaluations,
        depth_capped,
        balance = %balance,
        "aggregated {} worker results",
        results.len()
    );

    AggregateResult {
        integral,
        total_evaluations,
        depth_capped,
        per_worker_times: results.iter().map(|r| r.active).collect(),
        per_worker_evaluations: results.iter().map(|r| r.evaluations).collect(),
        per_worker_tasks: results.iter().map(|r| r.tasks_completed).collect(),
        signal,
        balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: usize, sum: f64, evals: u64, ms: u64) -> WorkerResult {
        WorkerResult {
            worker_id: id,
            partial_sum: sum,
            evaluations: evals,
            depth_capped: 0,
            tasks_completed: 10,
            active: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_sums() {
        let agg = aggregate(
            &[result(0, 0.25, 100, 5), result(1, 0.75, 300, 15)],
            BalanceSignal::ActiveTime,
        );
        assert!((agg.integral - 1.0).abs() < 1e-15);
        assert_eq!(agg.total_evaluations, 400);
        assert_eq!(agg.worker_count(), 2);
        assert_eq!(agg.total_tasks(), 20);
        assert_eq!(agg.per_worker_evaluations, vec![100, 300]);
    }

    #[test]
    fn test_time_spread() {
        let agg = aggregate(
            &[result(0, 0.0, 100, 5), result(1, 0.0, 300, 15)],
            BalanceSignal::ActiveTime,
        );
        let LoadBalance::Spread {
            min,
            max,
            mean,
            spread_percent,
        } = agg.balance
        else {
            panic!("expected a spread");
        };
        assert!((min - 5.0).abs() < 1e-9);
        assert!((max - 15.0).abs() < 1e-9);
        assert!((mean - 10.0).abs() < 1e-9);
        assert!((spread_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluation_spread() {
        let agg = aggregate(
            &[result(0, 0.0, 90, 1), result(1, 0.0, 110, 1)],
            BalanceSignal::Evaluations,
        );
        assert!((agg.balance.spread_percent().unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_worker_not_applicable() {
        let agg = aggregate(&[result(0, 0.5, 10, 3)], BalanceSignal::ActiveTime);
        assert_eq!(agg.balance, LoadBalance::NotApplicable);
        assert_eq!(agg.balance.spread_percent(), None);
        assert_eq!(agg.balance.to_string(), "N/A");
    }

    #[test]
    fn test_negligible_mean_reports_zero() {
        let agg = aggregate(
            &[result(0, 0.0, 0, 0), result(1, 0.0, 0, 0)],
            BalanceSignal::ActiveTime,
        );
        assert_eq!(agg.balance.spread_percent(), Some(0.0));
    }

    #[test]
    fn test_display() {
        let balance = LoadBalance::from_samples(&[1.0, 3.0]);
        assert_eq!(
            balance.to_string(),
            "Min=1.000, Max=3.000, Avg=2.000, Spread=100.00%"
        );
    }
}
