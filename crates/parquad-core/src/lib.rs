//! # parquad-core
//!
//! Shared vocabulary of the parquad integration engine.
//!
//! This crate provides:
//! - [`Domain`]: a validated integration interval `[a, b]`
//! - [`IntervalTask`] and [`TaskSequence`]: the immutable unit of parallel work
//!   and the ordered partition of a domain into such units
//! - [`Integrand`]: the function abstraction consumed by the quadrature kernel
//! - [`QuadError`]: the configuration errors surfaced before a run starts

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod error;
pub mod integrand;
pub mod task;

pub use domain::Domain;
pub use error::{QuadError, QuadResult};
pub use integrand::{BuiltinIntegrand, Integrand};
pub use task::{IntervalTask, TaskIndex, TaskSequence};

#[cfg(test)]
mod proptests;
