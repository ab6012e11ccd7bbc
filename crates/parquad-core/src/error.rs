//! Errors surfaced to callers of the engine.
//!
//! Only invalid configuration is an error. Numerical degeneracy inside the
//! quadrature kernel is accepted locally and never reaches this type.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type QuadResult<T> = Result<T, QuadError>;

/// Rejected input or a failure to start the worker pool.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuadError {
    /// Worker count must be at least one.
    #[error("worker count must be positive, got {0}")]
    InvalidWorkerCount(usize),

    /// Tolerance must be finite and strictly positive.
    #[error("tolerance must be finite and positive, got {0:e}")]
    InvalidTolerance(f64),

    /// Domain must satisfy `a < b` with both bounds finite.
    #[error("invalid domain [{a}, {b}]: bounds must be finite with a < b")]
    InvalidDomain {
        /// Lower bound as supplied.
        a: f64,
        /// Upper bound as supplied.
        b: f64,
    },

    /// A decomposition needs at least one task.
    #[error("target task count must be positive")]
    InvalidTaskCount,

    /// The kernel needs at least one level of refinement.
    #[error("maximum recursion depth must be positive")]
    InvalidDepth,

    /// A task was built with empty bounds or a non-positive error budget.
    #[error("invalid task [{lower}, {upper}] with error budget {error_budget:e}")]
    InvalidTask {
        /// Lower bound as supplied.
        lower: f64,
        /// Upper bound as supplied.
        upper: f64,
        /// Error budget as supplied.
        error_budget: f64,
    },

    /// The fixed worker pool could not be created.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(String),
}
