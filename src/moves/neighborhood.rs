//! Closed set of neighborhoods behind one dispatching type.

use super::config::MoveConfig;
use super::shift_smart::{ShiftProposal, ShiftSmart};
use super::stats::MoveStats;
use super::swap_smart::{SwapProposal, SwapSmart};
use super::switch::{Switch, SwitchProposal};
use super::types::{Move, MoveProposal};
use crate::model::{Cost, Problem, Solution};
use rand::Rng;

/// Any neighborhood of this crate.
///
/// Drivers keep a `Vec<Neighborhood>`, pick one (typically weighted by
/// [`Move::priority`]) and run the protocol without knowing the variant.
#[derive(Debug, Clone)]
pub enum Neighborhood {
    SwapSmart(SwapSmart),
    ShiftSmart(ShiftSmart),
    Switch(Switch),
}

impl Neighborhood {
    pub fn swap_smart(config: MoveConfig) -> Self {
        Neighborhood::SwapSmart(SwapSmart::new(config))
    }

    pub fn shift_smart(config: MoveConfig) -> Self {
        Neighborhood::ShiftSmart(ShiftSmart::new(config))
    }

    pub fn switch(config: MoveConfig) -> Self {
        Neighborhood::Switch(Switch::new(config))
    }
}

impl From<SwapSmart> for Neighborhood {
    fn from(n: SwapSmart) -> Self {
        Neighborhood::SwapSmart(n)
    }
}

impl From<ShiftSmart> for Neighborhood {
    fn from(n: ShiftSmart) -> Self {
        Neighborhood::ShiftSmart(n)
    }
}

impl From<Switch> for Neighborhood {
    fn from(n: Switch) -> Self {
        Neighborhood::Switch(n)
    }
}

/// A pending change produced by a [`Neighborhood`].
#[must_use = "a proposal must be accepted or rejected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    Swap(SwapProposal),
    Shift(ShiftProposal),
    Switch(SwitchProposal),
}

impl Proposal {
    fn kind(&self) -> &'static str {
        match self {
            Proposal::Swap(_) => "swap",
            Proposal::Shift(_) => "shift",
            Proposal::Switch(_) => "switch",
        }
    }
}

impl MoveProposal for Proposal {
    fn delta(&self) -> Cost {
        match self {
            Proposal::Swap(p) => p.delta(),
            Proposal::Shift(p) => p.delta(),
            Proposal::Switch(p) => p.delta(),
        }
    }
}

impl Move for Neighborhood {
    type Proposal = Proposal;

    fn name(&self) -> &str {
        match self {
            Neighborhood::SwapSmart(n) => n.name(),
            Neighborhood::ShiftSmart(n) => n.name(),
            Neighborhood::Switch(n) => n.name(),
        }
    }

    fn config(&self) -> &MoveConfig {
        match self {
            Neighborhood::SwapSmart(n) => n.config(),
            Neighborhood::ShiftSmart(n) => n.config(),
            Neighborhood::Switch(n) => n.config(),
        }
    }

    fn stats(&self) -> &MoveStats {
        match self {
            Neighborhood::SwapSmart(n) => n.stats(),
            Neighborhood::ShiftSmart(n) => n.stats(),
            Neighborhood::Switch(n) => n.stats(),
        }
    }

    fn has_move(&self, solution: &Solution) -> bool {
        match self {
            Neighborhood::SwapSmart(n) => n.has_move(solution),
            Neighborhood::ShiftSmart(n) => n.has_move(solution),
            Neighborhood::Switch(n) => n.has_move(solution),
        }
    }

    fn do_move<R: Rng>(
        &mut self,
        problem: &Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> Proposal {
        match self {
            Neighborhood::SwapSmart(n) => Proposal::Swap(n.do_move(problem, solution, rng)),
            Neighborhood::ShiftSmart(n) => Proposal::Shift(n.do_move(problem, solution, rng)),
            Neighborhood::Switch(n) => Proposal::Switch(n.do_move(problem, solution, rng)),
        }
    }

    /// # Panics
    ///
    /// Panics if `proposal` was produced by a different variant.
    fn accept(&mut self, proposal: Proposal) {
        match (self, proposal) {
            (Neighborhood::SwapSmart(n), Proposal::Swap(p)) => n.accept(p),
            (Neighborhood::ShiftSmart(n), Proposal::Shift(p)) => n.accept(p),
            (Neighborhood::Switch(n), Proposal::Switch(p)) => n.accept(p),
            (n, p) => panic!(
                "called `Neighborhood::accept` on {} with a {} proposal",
                n.name(),
                p.kind()
            ),
        }
    }

    /// # Panics
    ///
    /// Panics if `proposal` was produced by a different variant. The
    /// solution is left untouched in that case.
    fn reject(&mut self, problem: &Problem, solution: &mut Solution, proposal: Proposal) {
        match (self, proposal) {
            (Neighborhood::SwapSmart(n), Proposal::Swap(p)) => n.reject(problem, solution, p),
            (Neighborhood::ShiftSmart(n), Proposal::Shift(p)) => n.reject(problem, solution, p),
            (Neighborhood::Switch(n), Proposal::Switch(p)) => n.reject(problem, solution, p),
            (n, p) => panic!(
                "called `Neighborhood::reject` on {} with a {} proposal",
                n.name(),
                p.kind()
            ),
        }
    }
}
