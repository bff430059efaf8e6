//! Errors raised by validated construction of problems and solutions.

use crate::model::Cost;

/// Reasons a [`Problem`](crate::model::Problem) cannot be built from raw tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemError {
    /// The processing table has no machine rows.
    NoMachines,
    /// The processing table has no job columns.
    NoJobs,
    /// A processing row does not have one entry per job.
    ProcessingShape {
        machine: usize,
        expected: usize,
        found: usize,
    },
    /// The setup table does not have one matrix per machine.
    SetupMachineCount { expected: usize, found: usize },
    /// A setup matrix is not `n_jobs x n_jobs`.
    SetupShape {
        machine: usize,
        expected: usize,
        found: usize,
    },
    /// A processing time is negative.
    NegativeProcessingTime { machine: usize, job: usize },
    /// A setup time is negative.
    NegativeSetupTime {
        machine: usize,
        prev: usize,
        next: usize,
    },
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::NoMachines => write!(f, "the instance has no machines"),
            ProblemError::NoJobs => write!(f, "the instance has no jobs"),
            ProblemError::ProcessingShape {
                machine,
                expected,
                found,
            } => write!(
                f,
                "processing row of machine {} has {} entries, expected {}",
                machine, found, expected
            ),
            ProblemError::SetupMachineCount { expected, found } => write!(
                f,
                "setup table has {} machine matrices, expected {}",
                found, expected
            ),
            ProblemError::SetupShape {
                machine,
                expected,
                found,
            } => write!(
                f,
                "setup matrix of machine {} has a dimension of {}, expected {}",
                machine, found, expected
            ),
            ProblemError::NegativeProcessingTime { machine, job } => write!(
                f,
                "negative processing time for job {} on machine {}",
                job, machine
            ),
            ProblemError::NegativeSetupTime {
                machine,
                prev,
                next,
            } => write!(
                f,
                "negative setup time from job {} to job {} on machine {}",
                prev, next, machine
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

/// Reasons a [`Solution`](crate::model::Solution) is not a valid assignment
/// or no longer agrees with its cached costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionError {
    /// The assignment does not list one sequence per machine.
    MachineCount { expected: usize, found: usize },
    /// A job id outside `0..n_jobs` was assigned.
    UnknownJob { machine: usize, job: usize },
    /// A job appears more than once across all machines.
    DuplicateJob { job: usize },
    /// A job is not assigned to any machine.
    MissingJob { job: usize },
    /// A machine's cached cost differs from its recomputed cost.
    StaleMachineCost {
        machine: usize,
        cached: Cost,
        actual: Cost,
    },
    /// The aggregate cost differs from the recomputed aggregate.
    StaleCost { cached: Cost, actual: Cost },
    /// The recorded makespan machine is not the one with the highest cost.
    StaleMakespanMachine { cached: usize, actual: usize },
}

impl std::fmt::Display for SolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionError::MachineCount { expected, found } => write!(
                f,
                "assignment lists {} machines, expected {}",
                found, expected
            ),
            SolutionError::UnknownJob { machine, job } => {
                write!(f, "machine {} holds unknown job {}", machine, job)
            }
            SolutionError::DuplicateJob { job } => {
                write!(f, "job {} is assigned more than once", job)
            }
            SolutionError::MissingJob { job } => write!(f, "job {} is not assigned", job),
            SolutionError::StaleMachineCost {
                machine,
                cached,
                actual,
            } => write!(
                f,
                "machine {} caches cost {} but its sequence costs {}",
                machine, cached, actual
            ),
            SolutionError::StaleCost { cached, actual } => write!(
                f,
                "solution caches cost {} but its machines aggregate to {}",
                cached, actual
            ),
            SolutionError::StaleMakespanMachine { cached, actual } => write!(
                f,
                "makespan machine is recorded as {} but machine {} has the highest cost",
                cached, actual
            ),
        }
    }
}

impl std::error::Error for SolutionError {}
