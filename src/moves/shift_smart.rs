//! ShiftSmart: move one job to another machine at its cheapest position.

use super::config::MoveConfig;
use super::select;
use super::stats::MoveStats;
use super::types::{Move, MoveProposal};
use crate::model::{Cost, Problem, Solution};
use rand::Rng;
use tracing::trace;

/// A pending ShiftSmart relocation of `job` from `(from, origin)` to
/// `(to, target)`.
#[must_use = "a proposal must be accepted or rejected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftProposal {
    from: usize,
    to: usize,
    job: usize,
    origin: usize,
    target: usize,
    delta: Cost,
}

impl ShiftProposal {
    /// Machine the job was taken from.
    pub fn source(&self) -> usize {
        self.from
    }

    /// Machine the job was inserted into.
    pub fn destination(&self) -> usize {
        self.to
    }

    pub fn job(&self) -> usize {
        self.job
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

impl MoveProposal for ShiftProposal {
    fn delta(&self) -> Cost {
        self.delta
    }
}

/// Takes a random job off one machine and inserts it into another machine
/// at the position minimizing that machine's cost.
///
/// With `use_makespan_machine`, the source is the makespan machine whenever
/// it holds a job. The destination may be empty.
#[derive(Debug, Clone)]
pub struct ShiftSmart {
    name: String,
    config: MoveConfig,
    stats: MoveStats,
}

impl ShiftSmart {
    pub fn new(config: MoveConfig) -> Self {
        Self {
            name: config.decorate("ShiftSmart"),
            config,
            stats: MoveStats::default(),
        }
    }
}

impl Move for ShiftSmart {
    type Proposal = ShiftProposal;

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
        solution.n_machines() > 1 && solution.non_empty_machines() > 0
    }

    fn do_move<R: Rng>(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> ShiftProposal {
        assert!(
            self.has_move(solution),
            "called `ShiftSmart::do_move` on a solution with a single machine or no jobs"
        );
        let initial_cost = solution.cost();

        let mk = solution.makespan_machine();
        let from = if self.config.use_makespan_machine && !solution.machine(mk).is_empty() {
            mk
        } else {
            select::machine_where(solution, rng, |m| !solution.machine(m).is_empty())
        };
        let to = select::machine_where(solution, rng, |m| m != from);
        let origin = rng.random_range(0..solution.machine(from).job_count());

        let job = solution.machine_mut(from).remove(problem, origin);
        let (target, _) = solution.machine(to).best_insertion(problem, job);
        solution.machine_mut(to).insert(problem, job, target);
        solution.recompute_cost();

        let delta = solution.cost() - initial_cost;
        self.stats.on_proposal();
        trace!(
            neighborhood = %self.name,
            from,
            to,
            job,
            origin,
            target,
            delta,
            "proposed shift"
        );

        ShiftProposal {
            from,
            to,
            job,
            origin,
            target,
            delta,
        }
    }

    fn accept(&mut self, proposal: ShiftProposal) {
        self.stats.on_accept(proposal.delta);
        trace!(neighborhood = %self.name, delta = proposal.delta, "accepted shift");
    }

    fn reject(&mut self, problem: &Problem, solution: &mut Solution, proposal: ShiftProposal) {
        let ShiftProposal {
            from,
            to,
            job,
            origin,
            target,
            delta,
        } = proposal;

        let removed = solution.machine_mut(to).remove(problem, target);
        debug_assert_eq!(removed, job, "machine {} lost track of job {}", to, job);
        solution.machine_mut(from).insert(problem, job, origin);
        solution.recompute_cost();

        self.stats.on_reject();
        trace!(neighborhood = %self.name, delta, "rejected shift");
    }
}
