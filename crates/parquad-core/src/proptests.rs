//! Property-based tests for domains and tasks.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Domain, IntervalTask};

    // Strategy for finite bounds of moderate magnitude
    fn bound() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }

    proptest! {
        #[test]
        fn domain_accepts_exactly_ordered_bounds(a in bound(), b in bound()) {
            let domain = Domain::new(a, b);
            prop_assert_eq!(domain.is_ok(), a < b);
            if let Ok(d) = domain {
                prop_assert!(d.width() > 0.0);
                prop_assert!(d.contains(a) && d.contains(b));
            }
        }

        #[test]
        fn task_requires_positive_budget(
            lower in bound(),
            width in 1.0e-6f64..10.0,
            budget in -1.0f64..1.0,
        ) {
            let task = IntervalTask::new(lower, lower + width, budget);
            prop_assert_eq!(task.is_ok(), budget > 0.0);
        }
    }
}
