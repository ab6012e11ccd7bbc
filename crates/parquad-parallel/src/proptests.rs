//! Property-based tests for the work queue and the engine.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use proptest::prelude::*;

    use crate::{EngineConfig, ParallelIntegrator, WorkQueue};
    use parquad_core::{Domain, IntervalTask};
    use parquad_integrate::{decompose, integrate_sequential};

    fn unit_tasks(n: usize) -> Vec<IntervalTask> {
        (0..n)
            .map(|i| IntervalTask::new(i as f64, (i + 1) as f64, 1.0).unwrap())
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn queue_hands_out_each_index_once(n in 0usize..500, threads in 1usize..8) {
            let tasks = unit_tasks(n);
            let queue = WorkQueue::new(&tasks);
            let seen = Mutex::new(Vec::new());

            std::thread::scope(|s| {
                for _ in 0..threads {
                    s.spawn(|| {
                        let mut mine = Vec::new();
                        while let Some(i) = queue.claim() {
                            mine.push(i);
                        }
                        seen.lock().unwrap().extend(mine);
                    });
                }
            });

            let seen = seen.into_inner().unwrap();
            prop_assert_eq!(seen.len(), n);
            let unique: HashSet<_> = seen.into_iter().collect();
            prop_assert_eq!(unique.len(), n);
            prop_assert_eq!(queue.claim(), None);
        }

        #[test]
        fn estimate_independent_of_partition(
            k1 in 1usize..6,
            k2 in 1usize..6,
            lower in 0.05f64..1.0,
            width in 0.1f64..2.0,
            n in 1usize..400,
        ) {
            let f = |x: f64| (1.0 / x).sin() * x.exp();
            let tasks = decompose(Domain::new(lower, lower + width).unwrap(), 1e-7, n).unwrap();
            let run = |workers| {
                ParallelIntegrator::new(EngineConfig::default().with_workers(workers))
                    .unwrap()
                    .run_tasks(&tasks, &f)
                    .unwrap()
                    .integral()
            };
            let (v1, v2) = (run(k1), run(k2));
            prop_assert!((v1 - v2).abs() <= 1e-12 * v1.abs().max(1.0));

            let engine = ParallelIntegrator::new(EngineConfig::default().with_workers(k1)).unwrap();
            let sequential = integrate_sequential(&f, &tasks, engine.kernel()).value;
            prop_assert!((v1 - sequential).abs() <= 1e-12 * v1.abs().max(1.0));
        }
    }
}
