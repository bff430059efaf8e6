//! SwapSmart: exchange one job between two machines, reinserting each at its
//! cheapest position.

use super::config::MoveConfig;
use super::select;
use super::stats::MoveStats;
use super::types::{Move, MoveProposal};
use crate::model::{Cost, Problem, Solution};
use rand::Rng;
use tracing::trace;

/// A pending SwapSmart exchange.
///
/// `job1` left `machine1` from `origin1` and now sits on `machine2` at
/// `target2`; `job2` left `machine2` from `origin2` and now sits on
/// `machine1` at `target1`.
#[must_use = "a proposal must be accepted or rejected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapProposal {
    machine1: usize,
    machine2: usize,
    job1: usize,
    job2: usize,
    origin1: usize,
    origin2: usize,
    target1: usize,
    target2: usize,
    delta: Cost,
}

impl SwapProposal {
    pub fn machine1(&self) -> usize {
        self.machine1
    }

    pub fn machine2(&self) -> usize {
        self.machine2
    }

    pub fn job1(&self) -> usize {
        self.job1
    }

    pub fn job2(&self) -> usize {
        self.job2
    }

    /// Position `job1` held on `machine1` before the move.
    pub fn origin1(&self) -> usize {
        self.origin1
    }

    /// Position `job2` held on `machine2` before the move.
    pub fn origin2(&self) -> usize {
        self.origin2
    }

    /// Position of `job2` on `machine1` after the move.
    pub fn target1(&self) -> usize {
        self.target1
    }

    /// Position of `job1` on `machine2` after the move.
    pub fn target2(&self) -> usize {
        self.target2
    }
}

impl MoveProposal for SwapProposal {
    fn delta(&self) -> Cost {
        self.delta
    }
}

/// Swaps one random job between two machines and reinserts each job at the
/// position minimizing the receiving machine's cost.
///
/// Runs in O(n1 + n2) for machines holding n1 and n2 jobs.
#[derive(Debug, Clone)]
pub struct SwapSmart {
    name: String,
    config: MoveConfig,
    stats: MoveStats,
}

impl SwapSmart {
    pub fn new(config: MoveConfig) -> Self {
        Self {
            name: config.decorate("SwapSmart"),
            config,
            stats: MoveStats::default(),
        }
    }
}

impl Move for SwapSmart {
    type Proposal = SwapProposal;

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
        solution.n_machines() > 1 && solution.non_empty_machines() > 1
    }

    fn do_move<R: Rng>(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> SwapProposal {
        assert!(
            self.has_move(solution),
            "called `SwapSmart::do_move` on a solution with fewer than two non-empty machines"
        );
        let initial_cost = solution.cost();

        let (machine1, machine2) =
            select::non_empty_pair(solution, self.config.use_makespan_machine, rng);
        let origin1 = rng.random_range(0..solution.machine(machine1).job_count());
        let origin2 = rng.random_range(0..solution.machine(machine2).job_count());

        let job1 = solution.machine_mut(machine1).remove(problem, origin1);
        let job2 = solution.machine_mut(machine2).remove(problem, origin2);

        let (target1, _) = solution.machine(machine1).best_insertion(problem, job2);
        let (target2, _) = solution.machine(machine2).best_insertion(problem, job1);

        solution.machine_mut(machine1).insert(problem, job2, target1);
        solution.machine_mut(machine2).insert(problem, job1, target2);
        solution.recompute_cost();

        let delta = solution.cost() - initial_cost;
        self.stats.on_proposal();
        trace!(
            neighborhood = %self.name,
            machine1,
            machine2,
            job1,
            job2,
            origin1,
            origin2,
            target1,
            target2,
            delta,
            "proposed swap"
        );

        SwapProposal {
            machine1,
            machine2,
            job1,
            job2,
            origin1,
            origin2,
            target1,
            target2,
            delta,
        }
    }

    fn accept(&mut self, proposal: SwapProposal) {
        self.stats.on_accept(proposal.delta);
        trace!(neighborhood = %self.name, delta = proposal.delta, "accepted swap");
    }

    fn reject(&mut self, problem: &Problem, solution: &mut Solution, proposal: SwapProposal) {
        let SwapProposal {
            machine1,
            machine2,
            job1,
            job2,
            origin1,
            origin2,
            target1,
            target2,
            delta,
        } = proposal;

        let removed2 = solution.machine_mut(machine1).remove(problem, target1);
        let removed1 = solution.machine_mut(machine2).remove(problem, target2);
        debug_assert_eq!(removed2, job2, "machine {} lost track of job {}", machine1, job2);
        debug_assert_eq!(removed1, job1, "machine {} lost track of job {}", machine2, job1);

        solution.machine_mut(machine1).insert(problem, job1, origin1);
        solution.machine_mut(machine2).insert(problem, job2, origin2);
        solution.recompute_cost();

        self.stats.on_reject();
        trace!(neighborhood = %self.name, delta, "rejected swap");
    }
}
