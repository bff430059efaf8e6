//! Switch: exchange two jobs on the same machine.

use super::config::MoveConfig;
use super::select;
use super::stats::MoveStats;
use super::types::{Move, MoveProposal};
use crate::model::{Cost, Problem, Solution};
use rand::Rng;
use tracing::trace;

/// A pending exchange of the jobs at positions `first` and `second` of
/// `machine`.
#[must_use = "a proposal must be accepted or rejected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchProposal {
    machine: usize,
    first: usize,
    second: usize,
    delta: Cost,
}

impl SwitchProposal {
    pub fn machine(&self) -> usize {
        self.machine
    }

    pub fn positions(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl MoveProposal for SwitchProposal {
    fn delta(&self) -> Cost {
        self.delta
    }
}

/// Exchanges two random jobs within one machine.
///
/// With `use_makespan_machine`, the makespan machine is used whenever it
/// holds at least two jobs.
#[derive(Debug, Clone)]
pub struct Switch {
    name: String,
    config: MoveConfig,
    stats: MoveStats,
}

impl Switch {
    pub fn new(config: MoveConfig) -> Self {
        Self {
            name: config.decorate("Switch"),
            config,
            stats: MoveStats::default(),
        }
    }
}

impl Move for Switch {
    type Proposal = SwitchProposal;

    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &MoveConfig {
        &self.config
    }

    fn stats(&self) -> &MoveStats {
        &self.stats
    }

    fn has_move(&self, solution: &Solution) -> bool {
        solution.machines().iter().any(|m| m.job_count() > 1)
    }

    fn do_move<R: Rng>(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> SwitchProposal {
        assert!(
            self.has_move(solution),
            "called `Switch::do_move` on a solution without a machine holding two jobs"
        );
        let initial_cost = solution.cost();

        let mk = solution.makespan_machine();
        let machine = if self.config.use_makespan_machine && solution.machine(mk).job_count() > 1
        {
            mk
        } else {
            select::machine_where(solution, rng, |m| solution.machine(m).job_count() > 1)
        };
        let (first, second) = select::distinct_positions(solution.machine(machine).job_count(), rng);

        solution
            .machine_mut(machine)
            .swap_positions(problem, first, second);
        solution.recompute_cost();

        let delta = solution.cost() - initial_cost;
        self.stats.on_proposal();
        trace!(neighborhood = %self.name, machine, first, second, delta, "proposed switch");

        SwitchProposal {
            machine,
            first,
            second,
            delta,
        }
    }

    fn accept(&mut self, proposal: SwitchProposal) {
        self.stats.on_accept(proposal.delta);
        trace!(neighborhood = %self.name, delta = proposal.delta, "accepted switch");
    }

    fn reject(&mut self, problem: &Problem, solution: &mut Solution, proposal: SwitchProposal) {
        solution
            .machine_mut(proposal.machine)
            .swap_positions(problem, proposal.first, proposal.second);
        solution.recompute_cost();

        self.stats.on_reject();
        trace!(neighborhood = %self.name, delta = proposal.delta, "rejected switch");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{random_assignment, random_problem, tiny_problem};
    use crate::model::Objective;
    use crate::random::create_rng;

    #[test]
    fn test_has_move_needs_two_jobs_on_one_machine() {
        let p = tiny_problem();
        let switch = Switch::new(MoveConfig::default());
        let s = Solution::from_assignment(&p, Objective::Makespan, vec![vec![0, 2], vec![1]])
            .unwrap();
        assert!(switch.has_move(&s));

        let p = Problem::with_shared_setup(vec![vec![1, 2], vec![3, 4]], vec![vec![0, 0]; 2])
            .unwrap();
        let s = Solution::from_assignment(&p, Objective::Makespan, vec![vec![0], vec![1]])
            .unwrap();
        assert!(!switch.has_move(&s));
    }

    #[test]
    fn test_switch_reverses_pair() {
        let p = tiny_problem();
        let initial = Solution::from_assignment(&p, Objective::Makespan, vec![vec![0, 2], vec![1]])
            .unwrap();
        let mut switch = Switch::new(MoveConfig::default());
        let mut s = initial.clone();

        let proposal = switch.do_move(&p, &mut s, &mut create_rng(1));
        assert_eq!(proposal.machine(), 0);
        assert_eq!(s.machine(0).jobs(), &[2, 0]);
        assert_eq!(proposal.delta(), s.cost() - initial.cost());
        assert!(s.validate(&p).is_ok());

        switch.reject(&p, &mut s, proposal);
        assert_eq!(s, initial);
    }

    #[test]
    fn test_random_walk_stays_valid() {
        let mut rng = create_rng(31);
        let p = random_problem(20, 3, &mut rng);
        let assignment = random_assignment(&p, &mut rng);
        let mut s = Solution::from_assignment(&p, Objective::Makespan, assignment).unwrap();
        let mut switch = Switch::new(MoveConfig::default().with_makespan_machine(true));

        for _ in 0..300 {
            let before = s.clone();
            let proposal = switch.do_move(&p, &mut s, &mut rng);
            if before.bottleneck_machine().job_count() > 1 {
                assert_eq!(proposal.machine(), before.makespan_machine());
            }
            if proposal.delta() <= 0 {
                switch.accept(proposal);
            } else {
                switch.reject(&p, &mut s, proposal);
                assert_eq!(s, before);
            }
            assert!(s.validate(&p).is_ok());
        }
        assert_eq!(switch.stats().pending(), 0);
    }
}
