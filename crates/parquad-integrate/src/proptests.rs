//! Property-based tests for decomposition and the kernel.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{decompose, AdaptiveTrapezoid};
    use parquad_core::Domain;

    // Strategy for domains with a non-negligible width
    fn domain() -> impl Strategy<Value = Domain> {
        (-100.0f64..100.0, 1.0e-3f64..50.0)
            .prop_map(|(a, width)| Domain::new(a, a + width).unwrap())
    }

    proptest! {
        #[test]
        fn decomposition_is_a_partition(
            d in domain(),
            tolerance in 1.0e-12f64..1.0,
            n in 1usize..2000,
        ) {
            let tasks = decompose(d, tolerance, n).unwrap();
            prop_assert!(!tasks.is_empty());
            prop_assert!(tasks.len() <= n);
            prop_assert!(tasks.is_partition_of_domain());

            let width_err = (tasks.total_width() - d.width()).abs();
            prop_assert!(width_err <= 1.0e-9 * d.width().max(1.0));

            let budget_err = (tasks.total_error_budget() - tolerance).abs();
            prop_assert!(budget_err <= 1.0e-9 * tolerance);
        }

        #[test]
        fn zero_width_kernel_is_idempotent(a in -1.0e6f64..1.0e6, tol in 1.0e-12f64..1.0) {
            let est = AdaptiveTrapezoid::default().integrate(&|x: f64| x.sin() / x, a, a, tol);
            prop_assert_eq!(est.value, 0.0);
            prop_assert_eq!(est.evaluations, 0);
        }

        #[test]
        fn kernel_is_deterministic(lower in 0.01f64..1.0, width in 1.0e-4f64..1.0) {
            let kernel = AdaptiveTrapezoid::default();
            let f = |x: f64| (1.0 / x).sin();
            let first = kernel.integrate(&f, lower, lower + width, 1e-8);
            let second = kernel.integrate(&f, lower, lower + width, 1e-8);
            prop_assert_eq!(first, second);
        }
    }
}
