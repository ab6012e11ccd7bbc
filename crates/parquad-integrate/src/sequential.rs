//! Single-threaded reduction of a task sequence.
//!
//! This is the baseline the parallel engine must agree with, and the way
//! high-resolution reference values are computed.

use parquad_core::{Integrand, TaskSequence};

use crate::kernel::{AdaptiveTrapezoid, KernelEstimate};

/// Reduces every task in order on the calling thread.
pub fn integrate_sequential<F>(
    f: &F,
    tasks: &TaskSequence,
    kernel: &AdaptiveTrapezoid,
) -> KernelEstimate
where
    F: Integrand + ?Sized,
{
    tasks.iter().fold(KernelEstimate::default(), |mut acc, task| {
        acc.absorb(kernel.integrate(f, task.lower(), task.upper(), task.error_budget()));
        acc
    })
}
