//! A complete assignment of jobs to machines.

use super::machine::Machine;
use super::problem::{Cost, Problem};
use crate::error::SolutionError;
use tracing::debug;

/// How machine costs are aggregated into the solution cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Maximum machine cost.
    #[default]
    Makespan,
    /// Sum of machine costs.
    TotalCost,
}

/// An assignment of every job to exactly one position on one machine.
///
/// Machines are addressed by their id, which is also their index. The
/// aggregate cost and the makespan machine are refreshed by
/// [`Solution::recompute_cost`], which every move calls after mutating.
///
/// # Examples
///
/// ```
/// use u_upmsp::model::{Objective, Problem, Solution};
///
/// let problem = Problem::with_shared_setup(
///     vec![vec![4, 2, 3], vec![1, 5, 2]],
///     vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]],
/// )
/// .unwrap();
/// let solution =
///     Solution::from_assignment(&problem, Objective::Makespan, vec![vec![1], vec![0, 2]]).unwrap();
/// assert_eq!(solution.machine(0).cost(), 2);
/// assert_eq!(solution.machine(1).cost(), 1 + 2 + 2);
/// assert_eq!(solution.cost(), 5);
/// assert_eq!(solution.makespan_machine(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    machines: Vec<Machine>,
    objective: Objective,
    cost: Cost,
    makespan_machine: usize,
}

impl Solution {
    /// Builds a solution from one job sequence per machine.
    ///
    /// Every job of `problem` must appear exactly once.
    pub fn from_assignment(
        problem: &Problem,
        objective: Objective,
        assignment: Vec<Vec<usize>>,
    ) -> Result<Self, SolutionError> {
        if assignment.len() != problem.n_machines() {
            return Err(SolutionError::MachineCount {
                expected: problem.n_machines(),
                found: assignment.len(),
            });
        }
        check_conservation(problem, assignment.iter().map(Vec::as_slice))?;

        let machines = assignment
            .into_iter()
            .enumerate()
            .map(|(id, jobs)| Machine::with_jobs(problem, id, jobs))
            .collect();
        let mut solution = Self {
            machines,
            objective,
            cost: 0,
            makespan_machine: 0,
        };
        solution.recompute_cost();

        debug!(
            machines = solution.n_machines(),
            jobs = problem.n_jobs(),
            cost = solution.cost,
            "built solution"
        );
        Ok(solution)
    }

    #[inline]
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    #[inline]
    pub fn machine(&self, id: usize) -> &Machine {
        &self.machines[id]
    }

    #[inline]
    pub(crate) fn machine_mut(&mut self, id: usize) -> &mut Machine {
        &mut self.machines[id]
    }

    #[inline]
    pub fn n_machines(&self) -> usize {
        self.machines.len()
    }

    #[inline]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Aggregate cost as of the last [`Solution::recompute_cost`].
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Id of the machine with the highest cost (lowest id on ties).
    #[inline]
    pub fn makespan_machine(&self) -> usize {
        self.makespan_machine
    }

    /// The machine with the highest cost (lowest id on ties).
    #[inline]
    pub fn bottleneck_machine(&self) -> &Machine {
        &self.machines[self.makespan_machine]
    }

    /// Number of machines holding at least one job.
    pub fn non_empty_machines(&self) -> usize {
        self.machines.iter().filter(|m| !m.is_empty()).count()
    }

    /// Id of the machine holding `job`, if any.
    pub fn machine_of(&self, job: usize) -> Option<usize> {
        self.machines
            .iter()
            .position(|m| m.jobs().contains(&job))
    }

    /// Re-aggregates the cached machine costs and refreshes the makespan
    /// machine.
    pub fn recompute_cost(&mut self) {
        let (makespan_machine, max) = bottleneck(self.machines.iter().map(Machine::cost));
        self.makespan_machine = makespan_machine;
        self.cost = match self.objective {
            Objective::Makespan => max,
            Objective::TotalCost => self.machines.iter().map(Machine::cost).sum(),
        };
    }

    /// Checks every invariant against a from-scratch recomputation: each job
    /// assigned exactly once, cached machine costs, aggregate cost and
    /// makespan machine.
    pub fn validate(&self, problem: &Problem) -> Result<(), SolutionError> {
        if self.machines.len() != problem.n_machines() {
            return Err(SolutionError::MachineCount {
                expected: problem.n_machines(),
                found: self.machines.len(),
            });
        }
        check_conservation(problem, self.machines.iter().map(Machine::jobs))?;

        let mut actual_costs = Vec::with_capacity(self.machines.len());
        for machine in &self.machines {
            let actual = machine.evaluate(problem);
            if actual != machine.cost() {
                return Err(SolutionError::StaleMachineCost {
                    machine: machine.id(),
                    cached: machine.cost(),
                    actual,
                });
            }
            actual_costs.push(actual);
        }

        let (makespan_machine, max) = bottleneck(actual_costs.iter().copied());
        let actual = match self.objective {
            Objective::Makespan => max,
            Objective::TotalCost => actual_costs.iter().sum(),
        };
        if actual != self.cost {
            return Err(SolutionError::StaleCost {
                cached: self.cost,
                actual,
            });
        }
        if makespan_machine != self.makespan_machine {
            return Err(SolutionError::StaleMakespanMachine {
                cached: self.makespan_machine,
                actual: makespan_machine,
            });
        }
        Ok(())
    }
}

/// Index and value of the first maximum.
fn bottleneck(costs: impl Iterator<Item = Cost>) -> (usize, Cost) {
    let mut best = (0, Cost::MIN);
    for (id, cost) in costs.enumerate() {
        if cost > best.1 {
            best = (id, cost);
        }
    }
    best
}

fn check_conservation<'a>(
    problem: &Problem,
    sequences: impl Iterator<Item = &'a [usize]>,
) -> Result<(), SolutionError> {
    let mut seen = vec![false; problem.n_jobs()];
    for (machine, jobs) in sequences.enumerate() {
        for &job in jobs {
            if job >= problem.n_jobs() {
                return Err(SolutionError::UnknownJob { machine, job });
            }
            if seen[job] {
                return Err(SolutionError::DuplicateJob { job });
            }
            seen[job] = true;
        }
    }
    match seen.iter().position(|&s| !s) {
        Some(job) => Err(SolutionError::MissingJob { job }),
        None => Ok(()),
    }
}
