//! Core traits of the move protocol.

use super::config::MoveConfig;
use super::stats::MoveStats;
use crate::model::{Cost, Problem, Solution};
use rand::Rng;

/// A pending, reversible change applied to a solution.
///
/// A proposal is the only record of what `do_move` changed. It is consumed
/// by exactly one of [`Move::accept`] or [`Move::reject`].
pub trait MoveProposal {
    /// `cost(after) - cost(before)` of the proposed change.
    fn delta(&self) -> Cost;
}

/// A neighborhood that proposes, commits and undoes one perturbation at a
/// time.
///
/// # Lifecycle
///
/// 1. **`has_move`**: the driver checks that the neighborhood applies.
/// 2. **`do_move`**: the solution is mutated in place and a proposal
///    carrying the cost delta is returned.
/// 3. **`accept`** or **`reject`**: the proposal is consumed. Accepting keeps
///    the mutated state; rejecting restores the solution exactly as it was
///    before `do_move` (sequences, positions, machine and aggregate costs).
///
/// The solution must not be mutated by anything else while a proposal is
/// pending.
///
/// # Examples
///
/// ```
/// use u_upmsp::model::{Objective, Problem, Solution};
/// use u_upmsp::moves::{Move, MoveConfig, MoveProposal, SwapSmart};
/// use u_upmsp::random::create_rng;
///
/// let problem = Problem::with_shared_setup(
///     vec![vec![4, 2, 3], vec![1, 5, 2]],
///     vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]],
/// )
/// .unwrap();
/// let mut solution =
///     Solution::from_assignment(&problem, Objective::Makespan, vec![vec![0, 2], vec![1]]).unwrap();
/// let before = solution.clone();
///
/// let mut swap = SwapSmart::new(MoveConfig::default());
/// let mut rng = create_rng(42);
///
/// assert!(swap.has_move(&solution));
/// let proposal = swap.do_move(&problem, &mut solution, &mut rng);
/// if proposal.delta() < 0 {
///     swap.accept(proposal);
/// } else {
///     swap.reject(&problem, &mut solution, proposal);
///     assert_eq!(solution, before);
/// }
/// ```
pub trait Move {
    /// The pending change produced by `do_move`.
    type Proposal: MoveProposal;

    /// Returns a human-readable name for this neighborhood.
    fn name(&self) -> &str;

    /// Returns the configuration this neighborhood was built with.
    fn config(&self) -> &MoveConfig;

    /// Relative selection weight for the driver.
    fn priority(&self) -> u32 {
        self.config().priority
    }

    /// Returns the counters accumulated so far.
    fn stats(&self) -> &MoveStats;

    /// Whether a structurally valid proposal exists for `solution`.
    fn has_move(&self, solution: &Solution) -> bool;

    /// Applies one random perturbation to `solution`.
    ///
    /// # Panics
    ///
    /// Panics if [`Move::has_move`] is false for `solution`. The solution is
    /// left untouched in that case.
    fn do_move<R: Rng>(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> Self::Proposal;

    /// Commits a proposal.
    fn accept(&mut self, proposal: Self::Proposal);

    /// Undoes a proposal, restoring `solution` to its state before `do_move`.
    fn reject(&mut self, problem: &Problem, solution: &mut Solution, proposal: Self::Proposal);
}
