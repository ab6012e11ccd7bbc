//! # parquad
//!
//! Parallel adaptive quadrature for integrands with an irregular difficulty
//! profile.
//!
//! The domain is split into many small tasks with width-proportional error
//! budgets. A fixed pool of workers pulls tasks from a shared atomic cursor
//! and reduces each one with an adaptive trapezoidal kernel; the partial sums
//! are aggregated after every worker has been joined.
//!
//! ## Quick Start
//!
//! ```
//! use parquad::prelude::*;
//!
//! let config = EngineConfig::default()
//!     .with_workers(2)
//!     .with_tolerance(1e-6)
//!     .with_domain(0.0, 1.0);
//! let outcome = parquad::integrate(&|x: f64| x * x, config).unwrap();
//! assert!((outcome.integral() - 1.0 / 3.0).abs() < 1e-6);
//! println!("{}", Summary::new(&outcome));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;

pub use parquad_core as core;
pub use parquad_integrate as quadrature;
pub use parquad_parallel as parallel;

use parquad_core::{Integrand, QuadResult};
use parquad_parallel::{EngineConfig, ParallelIntegrator, RunOutcome};

/// Validates `config` and integrates `f` with a fresh worker pool.
///
/// # Errors
///
/// Rejects invalid configuration before any worker starts, and reports a
/// worker pool that could not be created.
pub fn integrate<F>(f: &F, config: EngineConfig) -> QuadResult<RunOutcome>
where
    F: Integrand + ?Sized,
{
    ParallelIntegrator::new(config)?.run(f)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::report::Summary;
    pub use parquad_core::{BuiltinIntegrand, Domain, Integrand, QuadError, QuadResult};
    pub use parquad_integrate::{decompose, integrate_sequential, AdaptiveTrapezoid};
    pub use parquad_parallel::{
        BalanceSignal, EngineConfig, LoadBalance, ParallelIntegrator, RunOutcome,
    };
}
