//! Immutable instance data.

use crate::error::ProblemError;

/// Cost unit shared by processing times, setup times and objective values.
///
/// Integer costs keep incremental bookkeeping exact: undoing a move restores
/// the very same values, not an approximation of them.
pub type Cost = i64;

/// An unrelated parallel machine scheduling instance with
/// sequence-dependent setup times.
///
/// Processing times depend on the (machine, job) pair and setup times on the
/// (machine, previous job, next job) triple. Both tables are stored as flat
/// row-major arenas addressed by integer ids.
///
/// # Examples
///
/// ```
/// use u_upmsp::model::Problem;
///
/// // two machines, three jobs, same setup matrix on both machines
/// let problem = Problem::with_shared_setup(
///     vec![vec![4, 2, 3], vec![1, 5, 2]],
///     vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]],
/// )
/// .unwrap();
/// assert_eq!(problem.n_jobs(), 3);
/// assert_eq!(problem.processing_time(1, 0), 1);
/// assert_eq!(problem.setup_time(0, 0, 2), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    n_jobs: usize,
    n_machines: usize,
    processing: Vec<Cost>,
    setup: Vec<Cost>,
}

impl Problem {
    /// Builds an instance from `processing[machine][job]` and
    /// `setup[machine][prev][next]`.
    pub fn new(
        processing: Vec<Vec<Cost>>,
        setup: Vec<Vec<Vec<Cost>>>,
    ) -> Result<Self, ProblemError> {
        let n_machines = processing.len();
        if n_machines == 0 {
            return Err(ProblemError::NoMachines);
        }
        let n_jobs = processing[0].len();
        if n_jobs == 0 {
            return Err(ProblemError::NoJobs);
        }
        if setup.len() != n_machines {
            return Err(ProblemError::SetupMachineCount {
                expected: n_machines,
                found: setup.len(),
            });
        }

        let mut flat_processing = Vec::with_capacity(n_machines * n_jobs);
        for (machine, row) in processing.iter().enumerate() {
            if row.len() != n_jobs {
                return Err(ProblemError::ProcessingShape {
                    machine,
                    expected: n_jobs,
                    found: row.len(),
                });
            }
            if let Some(job) = row.iter().position(|&p| p < 0) {
                return Err(ProblemError::NegativeProcessingTime { machine, job });
            }
            flat_processing.extend_from_slice(row);
        }

        let mut flat_setup = Vec::with_capacity(n_machines * n_jobs * n_jobs);
        for (machine, matrix) in setup.iter().enumerate() {
            if matrix.len() != n_jobs {
                return Err(ProblemError::SetupShape {
                    machine,
                    expected: n_jobs,
                    found: matrix.len(),
                });
            }
            for (prev, row) in matrix.iter().enumerate() {
                if row.len() != n_jobs {
                    return Err(ProblemError::SetupShape {
                        machine,
                        expected: n_jobs,
                        found: row.len(),
                    });
                }
                if let Some(next) = row.iter().position(|&s| s < 0) {
                    return Err(ProblemError::NegativeSetupTime {
                        machine,
                        prev,
                        next,
                    });
                }
                flat_setup.extend_from_slice(row);
            }
        }

        Ok(Self {
            n_jobs,
            n_machines,
            processing: flat_processing,
            setup: flat_setup,
        })
    }

    /// Builds an instance whose machines all share one `setup[prev][next]`
    /// matrix.
    pub fn with_shared_setup(
        processing: Vec<Vec<Cost>>,
        setup: Vec<Vec<Cost>>,
    ) -> Result<Self, ProblemError> {
        let per_machine = vec![setup; processing.len()];
        Self::new(processing, per_machine)
    }

    #[inline]
    pub fn n_jobs(&self) -> usize {
        self.n_jobs
    }

    #[inline]
    pub fn n_machines(&self) -> usize {
        self.n_machines
    }

    /// Processing time of `job` on `machine`.
    #[inline]
    pub fn processing_time(&self, machine: usize, job: usize) -> Cost {
        debug_assert!(
            machine < self.n_machines && job < self.n_jobs,
            "called `Problem::processing_time` out of bounds: machine {} of {}, job {} of {}",
            machine,
            self.n_machines,
            job,
            self.n_jobs
        );
        self.processing[machine * self.n_jobs + job]
    }

    /// Setup time on `machine` when `next` directly follows `prev`.
    #[inline]
    pub fn setup_time(&self, machine: usize, prev: usize, next: usize) -> Cost {
        debug_assert!(
            machine < self.n_machines && prev < self.n_jobs && next < self.n_jobs,
            "called `Problem::setup_time` out of bounds: machine {} of {}, jobs ({}, {}) of {}",
            machine,
            self.n_machines,
            prev,
            next,
            self.n_jobs
        );
        self.setup[(machine * self.n_jobs + prev) * self.n_jobs + next]
    }
}
