//! A single machine: an ordered job sequence and its cached cost.

use super::problem::{Cost, Problem};

/// One machine of a solution.
///
/// The cost of a machine is the processing time of every job it holds plus
/// the setup time between each pair of consecutive jobs. The first job of a
/// sequence incurs no setup. The cached cost is updated by every mutation and
/// always equals [`Machine::evaluate`] once the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Machine {
    id: usize,
    jobs: Vec<usize>,
    cost: Cost,
}

impl Machine {
    /// Creates an empty machine.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            jobs: Vec::new(),
            cost: 0,
        }
    }

    /// Creates a machine holding `jobs` in the given order.
    pub fn with_jobs(problem: &Problem, id: usize, jobs: Vec<usize>) -> Self {
        let mut machine = Self { id, jobs, cost: 0 };
        machine.cost = machine.evaluate(problem);
        machine
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn jobs(&self) -> &[usize] {
        &self.jobs
    }

    /// Job at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= job_count()`.
    #[inline]
    pub fn job(&self, position: usize) -> usize {
        self.jobs[position]
    }

    #[inline]
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Cached cost of the current sequence.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Recomputes the cost of the current sequence from scratch.
    pub fn evaluate(&self, problem: &Problem) -> Cost {
        let processing: Cost = self
            .jobs
            .iter()
            .map(|&job| problem.processing_time(self.id, job))
            .sum();
        let setup: Cost = self
            .jobs
            .windows(2)
            .map(|pair| problem.setup_time(self.id, pair[0], pair[1]))
            .sum();
        processing + setup
    }

    /// Change of this machine's cost if `job` were inserted at `position`.
    ///
    /// Only the jobs adjacent to `position` are consulted, so the query is
    /// O(1) and leaves the machine untouched.
    ///
    /// # Panics
    ///
    /// Panics if `position > job_count()` or `job` is not a job of `problem`.
    pub fn delta_cost_if_inserted(&self, problem: &Problem, job: usize, position: usize) -> Cost {
        assert!(
            position <= self.jobs.len(),
            "called `Machine::delta_cost_if_inserted` with position out of range: the len is {} but the position is {}",
            self.jobs.len(),
            position
        );
        assert!(
            job < problem.n_jobs(),
            "called `Machine::delta_cost_if_inserted` with unknown job {} (instance has {} jobs)",
            job,
            problem.n_jobs()
        );

        let prev = position.checked_sub(1).map(|p| self.jobs[p]);
        let next = self.jobs.get(position).copied();

        let mut delta = problem.processing_time(self.id, job);
        if let Some(prev) = prev {
            delta += problem.setup_time(self.id, prev, job);
        }
        if let Some(next) = next {
            delta += problem.setup_time(self.id, job, next);
        }
        if let (Some(prev), Some(next)) = (prev, next) {
            delta -= problem.setup_time(self.id, prev, next);
        }
        delta
    }

    /// Cost this machine would have after inserting `job` at `position`.
    #[inline]
    pub fn cost_if_inserted(&self, problem: &Problem, job: usize, position: usize) -> Cost {
        self.cost + self.delta_cost_if_inserted(problem, job, position)
    }

    /// Change of this machine's cost if the job at `position` were removed.
    ///
    /// # Panics
    ///
    /// Panics if `position >= job_count()`.
    pub fn delta_cost_if_removed(&self, problem: &Problem, position: usize) -> Cost {
        assert!(
            position < self.jobs.len(),
            "called `Machine::delta_cost_if_removed` with position out of range: the len is {} but the position is {}",
            self.jobs.len(),
            position
        );

        let job = self.jobs[position];
        let prev = position.checked_sub(1).map(|p| self.jobs[p]);
        let next = self.jobs.get(position + 1).copied();

        let mut delta = -problem.processing_time(self.id, job);
        if let Some(prev) = prev {
            delta -= problem.setup_time(self.id, prev, job);
        }
        if let Some(next) = next {
            delta -= problem.setup_time(self.id, job, next);
        }
        if let (Some(prev), Some(next)) = (prev, next) {
            delta += problem.setup_time(self.id, prev, next);
        }
        delta
    }

    /// Cheapest position to insert `job`, with the resulting machine cost.
    ///
    /// Positions are scanned in ascending order and only a strictly lower
    /// cost replaces the incumbent, so ties resolve to the lowest position.
    pub fn best_insertion(&self, problem: &Problem, job: usize) -> (usize, Cost) {
        let mut best_position = 0;
        let mut best_cost = Cost::MAX;
        for position in 0..=self.jobs.len() {
            let cost = self.cost_if_inserted(problem, job, position);
            if cost < best_cost {
                best_cost = cost;
                best_position = position;
            }
        }
        (best_position, best_cost)
    }

    /// Inserts `job` at `position` and updates the cached cost.
    ///
    /// # Panics
    ///
    /// Panics if `position > job_count()`. The machine is left untouched.
    pub fn insert(&mut self, problem: &Problem, job: usize, position: usize) {
        let delta = self.delta_cost_if_inserted(problem, job, position);
        self.jobs.insert(position, job);
        self.cost += delta;
    }

    /// Removes and returns the job at `position`, updating the cached cost.
    ///
    /// # Panics
    ///
    /// Panics if `position >= job_count()`. The machine is left untouched.
    pub fn remove(&mut self, problem: &Problem, position: usize) -> usize {
        let delta = self.delta_cost_if_removed(problem, position);
        let job = self.jobs.remove(position);
        self.cost += delta;
        job
    }

    /// Exchanges the jobs at positions `a` and `b` and recomputes the cost.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range. The machine is left untouched.
    pub fn swap_positions(&mut self, problem: &Problem, a: usize, b: usize) {
        assert!(
            a < self.jobs.len() && b < self.jobs.len(),
            "called `Machine::swap_positions` with position out of range: the len is {} but the positions are {} and {}",
            self.jobs.len(),
            a,
            b
        );
        self.jobs.swap(a, b);
        self.cost = self.evaluate(problem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{random_problem, tiny_problem};
    use rand::Rng;

    #[test]
    fn test_empty_machine() {
        let m = Machine::new(3);
        assert_eq!(m.id(), 3);
        assert!(m.is_empty());
        assert_eq!(m.job_count(), 0);
        assert_eq!(m.cost(), 0);
    }

    #[test]
    fn test_with_jobs_caches_cost() {
        let p = tiny_problem();
        // machine 0: p(0,0)=2, p(0,2)=4, s(0,0,2)=3
        let m = Machine::with_jobs(&p, 0, vec![0, 2]);
        assert_eq!(m.cost(), 2 + 4 + 3);
        assert_eq!(m.cost(), m.evaluate(&p));
    }

    #[test]
    fn test_first_job_has_no_setup() {
        let p = tiny_problem();
        let m = Machine::with_jobs(&p, 1, vec![1]);
        assert_eq!(m.cost(), p.processing_time(1, 1));
    }

    #[test]
    fn test_delta_insert_matches_recompute() {
        let p = tiny_problem();
        let m = Machine::with_jobs(&p, 0, vec![0, 2]);
        for position in 0..=m.job_count() {
            let predicted = m.cost_if_inserted(&p, 1, position);
            let mut copy = m.clone();
            copy.insert(&p, 1, position);
            assert_eq!(predicted, copy.cost());
            assert_eq!(copy.cost(), copy.evaluate(&p));
        }
    }

    #[test]
    fn test_delta_remove_matches_recompute() {
        let p = tiny_problem();
        let m = Machine::with_jobs(&p, 1, vec![2, 0, 1]);
        for position in 0..m.job_count() {
            let predicted = m.cost() + m.delta_cost_if_removed(&p, position);
            let mut copy = m.clone();
            copy.remove(&p, position);
            assert_eq!(predicted, copy.cost());
            assert_eq!(copy.cost(), copy.evaluate(&p));
        }
    }

    #[test]
    fn test_remove_returns_job() {
        let p = tiny_problem();
        let mut m = Machine::with_jobs(&p, 0, vec![2, 0, 1]);
        assert_eq!(m.remove(&p, 1), 0);
        assert_eq!(m.jobs(), &[2, 1]);
    }

    #[test]
    fn test_insert_then_remove_restores_cost() {
        let p = tiny_problem();
        let mut m = Machine::with_jobs(&p, 1, vec![0, 2]);
        let before = m.clone();
        m.insert(&p, 1, 1);
        m.remove(&p, 1);
        assert_eq!(m, before);
    }

    #[test]
    fn test_best_insertion_is_minimal_and_first() {
        let p = tiny_problem();
        let m = Machine::with_jobs(&p, 0, vec![0, 2]);
        let (best, cost) = m.best_insertion(&p, 1);
        for position in 0..=m.job_count() {
            let c = m.cost_if_inserted(&p, 1, position);
            assert!(cost <= c);
            if position < best {
                assert!(c > cost, "an earlier position ties with the chosen one");
            }
        }
    }

    #[test]
    fn test_best_insertion_tie_breaks_to_lowest() {
        // all costs zero except processing: every position ties
        let p = Problem::with_shared_setup(vec![vec![1, 1, 1]], vec![vec![0; 3]; 3]).unwrap();
        let m = Machine::with_jobs(&p, 0, vec![0, 1]);
        assert_eq!(m.best_insertion(&p, 2), (0, 3));
    }

    #[test]
    fn test_best_insertion_on_empty_machine() {
        let p = tiny_problem();
        let m = Machine::new(1);
        assert_eq!(m.best_insertion(&p, 2), (0, p.processing_time(1, 2)));
    }

    #[test]
    fn test_swap_positions() {
        let p = tiny_problem();
        let mut m = Machine::with_jobs(&p, 0, vec![0, 1, 2]);
        m.swap_positions(&p, 0, 2);
        assert_eq!(m.jobs(), &[2, 1, 0]);
        assert_eq!(m.cost(), m.evaluate(&p));
        m.swap_positions(&p, 0, 2);
        assert_eq!(m, Machine::with_jobs(&p, 0, vec![0, 1, 2]));
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_insert_out_of_range_panics() {
        let p = tiny_problem();
        let mut m = Machine::with_jobs(&p, 0, vec![0]);
        m.insert(&p, 1, 2);
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_remove_out_of_range_panics() {
        let p = tiny_problem();
        let mut m = Machine::with_jobs(&p, 0, vec![0]);
        m.remove(&p, 1);
    }

    #[test]
    fn test_failed_insert_leaves_machine_untouched() {
        let p = tiny_problem();
        let m = Machine::with_jobs(&p, 0, vec![0, 2]);
        let mut copy = m.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            copy.insert(&p, 1, 5);
        }));
        assert!(result.is_err());
        assert_eq!(copy, m);
    }

    #[test]
    fn test_random_mutations_keep_cost_exact() {
        let mut rng = crate::random::create_rng(7);
        let p = random_problem(12, 3, &mut rng);
        let mut m = Machine::with_jobs(&p, 2, (0..6).collect());
        let mut pool: Vec<usize> = (6..12).collect();

        for _ in 0..500 {
            if !pool.is_empty() && (m.is_empty() || rng.random_bool(0.5)) {
                let job = pool.swap_remove(rng.random_range(0..pool.len()));
                let position = rng.random_range(0..=m.job_count());
                m.insert(&p, job, position);
            } else {
                let position = rng.random_range(0..m.job_count());
                pool.push(m.remove(&p, position));
            }
            assert_eq!(m.cost(), m.evaluate(&p));
        }
    }
}
