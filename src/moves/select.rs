//! Random machine selection shared by the neighborhoods.
//!
//! Selection is rejection sampling over machine ids: draws are repeated until
//! the predicate holds, which keeps the choice uniform among the admissible
//! machines. Callers guarantee, through `has_move`, that an admissible
//! machine exists.

use crate::model::Solution;
use rand::Rng;

/// A machine drawn uniformly among those satisfying `admissible`.
pub(crate) fn machine_where<R, F>(solution: &Solution, rng: &mut R, admissible: F) -> usize
where
    R: Rng,
    F: Fn(usize) -> bool,
{
    loop {
        let m = rng.random_range(0..solution.n_machines());
        if admissible(m) {
            return m;
        }
    }
}

/// Two distinct non-empty machines.
///
/// With `use_makespan_machine` and a non-empty makespan machine, the first
/// machine is the makespan machine and the second is drawn among the other
/// non-empty machines. Otherwise both are drawn together until they are
/// distinct and non-empty.
pub(crate) fn non_empty_pair<R: Rng>(
    solution: &Solution,
    use_makespan_machine: bool,
    rng: &mut R,
) -> (usize, usize) {
    let mk = solution.makespan_machine();
    if use_makespan_machine && !solution.machine(mk).is_empty() {
        let other = machine_where(solution, rng, |m| {
            m != mk && !solution.machine(m).is_empty()
        });
        return (mk, other);
    }

    loop {
        let m1 = rng.random_range(0..solution.n_machines());
        let m2 = rng.random_range(0..solution.n_machines());
        if m1 != m2 && !solution.machine(m1).is_empty() && !solution.machine(m2).is_empty() {
            return (m1, m2);
        }
    }
}

/// Two distinct positions in `0..len`, `len >= 2`.
pub(crate) fn distinct_positions<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(len >= 2, "called `distinct_positions` with len {}", len);
    let a = rng.random_range(0..len);
    loop {
        let b = rng.random_range(0..len);
        if b != a {
            return (a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::random_problem;
    use crate::model::{Objective, Problem};
    use crate::random::create_rng;

    fn four_machines() -> (Problem, Solution) {
        let mut rng = create_rng(1);
        let p = random_problem(6, 4, &mut rng);
        let s = Solution::from_assignment(
            &p,
            Objective::Makespan,
            vec![vec![0, 1, 2], vec![], vec![3, 4], vec![5]],
        )
        .unwrap();
        (p, s)
    }

    #[test]
    fn test_pair_is_distinct_and_non_empty() {
        let (_, s) = four_machines();
        let mut rng = create_rng(9);
        for _ in 0..200 {
            let (a, b) = non_empty_pair(&s, false, &mut rng);
            assert_ne!(a, b);
            assert!(!s.machine(a).is_empty());
            assert!(!s.machine(b).is_empty());
        }
    }

    #[test]
    fn test_pair_fixes_makespan_machine() {
        let (_, s) = four_machines();
        let mk = s.makespan_machine();
        let mut rng = create_rng(9);
        for _ in 0..200 {
            let (a, b) = non_empty_pair(&s, true, &mut rng);
            assert_eq!(a, mk);
            assert_ne!(b, mk);
            assert!(!s.machine(b).is_empty());
        }
    }

    #[test]
    fn test_pair_covers_every_admissible_machine() {
        let (_, s) = four_machines();
        let mut rng = create_rng(3);
        let mut hits = [0usize; 4];
        for _ in 0..600 {
            let (a, b) = non_empty_pair(&s, false, &mut rng);
            hits[a] += 1;
            hits[b] += 1;
        }
        assert_eq!(hits[1], 0);
        assert!(hits[0] > 0 && hits[2] > 0 && hits[3] > 0);
    }

    #[test]
    fn test_distinct_positions() {
        let mut rng = create_rng(5);
        for _ in 0..100 {
            let (a, b) = distinct_positions(2, &mut rng);
            assert_ne!(a, b);
            assert!(a < 2 && b < 2);
        }
    }
}
