//! # parquad-parallel
//!
//! Parallel reduction of a task sequence through the adaptive quadrature
//! kernel.
//!
//! This crate provides:
//! - [`WorkQueue`]: a wait-free cursor handing out each task index once
//! - [`Worker`]: the claim-and-integrate loop run by each pool thread
//! - [`aggregate`]: the post-join reduction into an [`AggregateResult`]
//! - [`ParallelIntegrator`]: validation, decomposition, the fixed rayon pool
//!   and the join barrier tied together
//!
//! ## Scheduling
//!
//! Tasks are built up front, then shared read-only. Workers race on a single
//! atomic fetch-and-increment, so faster workers simply claim more tasks. The
//! partition of tasks across workers is nondeterministic; the estimate only
//! varies in the last bits because floating-point addition is not associative.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod queue;
pub mod worker;

pub use aggregate::{aggregate, AggregateResult, BalanceSignal, LoadBalance};
pub use config::EngineConfig;
pub use engine::{ParallelIntegrator, RunOutcome};
pub use queue::WorkQueue;
pub use worker::{Worker, WorkerResult};

#[cfg(test)]
mod proptests;
