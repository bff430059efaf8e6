//! Instances shared by the unit tests.

use super::problem::{Cost, Problem};
use rand::Rng;

/// Two machines, three jobs, asymmetric per-machine setups.
pub(crate) fn tiny_problem() -> Problem {
    Problem::new(
        vec![vec![2, 5, 4], vec![3, 1, 6]],
        vec![
            vec![vec![0, 1, 3], vec![2, 0, 2], vec![1, 4, 0]],
            vec![vec![0, 2, 2], vec![3, 0, 1], vec![2, 2, 0]],
        ],
    )
    .unwrap()
}

/// Processing times in `1..100`, setup times in `0..50`.
pub(crate) fn random_problem<R: Rng>(n_jobs: usize, n_machines: usize, rng: &mut R) -> Problem {
    let processing: Vec<Vec<Cost>> = (0..n_machines)
        .map(|_| (0..n_jobs).map(|_| rng.random_range(1..100)).collect())
        .collect();
    let setup: Vec<Vec<Vec<Cost>>> = (0..n_machines)
        .map(|_| {
            (0..n_jobs)
                .map(|_| (0..n_jobs).map(|_| rng.random_range(0..50)).collect())
                .collect()
        })
        .collect();
    Problem::new(processing, setup).unwrap()
}

/// Deals jobs `0..n_jobs` over the machines at random.
pub(crate) fn random_assignment<R: Rng>(problem: &Problem, rng: &mut R) -> Vec<Vec<usize>> {
    let mut assignment = vec![Vec::new(); problem.n_machines()];
    for job in 0..problem.n_jobs() {
        let machine = rng.random_range(0..problem.n_machines());
        assignment[machine].push(job);
    }
    assignment
}
