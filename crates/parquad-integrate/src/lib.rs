//! # parquad-integrate
//!
//! Numerical building blocks of the parquad engine.
//!
//! # Available Pieces
//!
//! - **Adaptive trapezoid kernel**: recursive bisection with a Richardson
//!   corrected acceptance test, see [`AdaptiveTrapezoid`]
//! - **Task decomposition**: equal-width partition of a domain with
//!   width-proportional error budgets, see [`decompose`]
//! - **Sequential reduction**: the single-threaded baseline, see
//!   [`integrate_sequential`]
//!
//! # Example
//!
//! ```
//! use parquad_core::Domain;
//! use parquad_integrate::{decompose, integrate_sequential, AdaptiveTrapezoid};
//!
//! let domain = Domain::new(0.0, 1.0).unwrap();
//! let tasks = decompose(domain, 1e-8, 100).unwrap();
//! let result = integrate_sequential(&|x: f64| x * x, &tasks, &AdaptiveTrapezoid::default());
//! assert!((result.value - 1.0 / 3.0).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod decompose;
pub mod kernel;
pub mod sequential;

pub use decompose::{check_budget, decompose, default_task_count};
pub use kernel::{AdaptiveTrapezoid, KernelEstimate, DEFAULT_MAX_DEPTH};
pub use sequential::integrate_sequential;

#[cfg(test)]
mod proptests;
