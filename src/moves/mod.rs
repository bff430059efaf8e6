//! Move protocol and neighborhoods.
//!
//! A driver asks a neighborhood whether it applies (`has_move`), lets it
//! perturb the solution in place (`do_move`), reads the returned delta and
//! then either commits (`accept`) or undoes (`reject`) the change. The
//! proposal returned by `do_move` carries everything needed for an exact
//! undo, so neighborhoods themselves hold only configuration and counters.
//!
//! Neighborhoods:
//!
//! - [`SwapSmart`]: exchange one job between two machines, reinserting each
//!   at its cheapest position.
//! - [`ShiftSmart`]: move one job to another machine at its cheapest
//!   position.
//! - [`Switch`]: exchange two jobs on one machine.
//!
//! [`Neighborhood`] wraps all of them behind one type.

mod config;
mod neighborhood;
mod select;
mod shift_smart;
mod stats;
mod swap_smart;
mod switch;
mod types;

pub use config::MoveConfig;
pub use neighborhood::{Neighborhood, Proposal};
pub use shift_smart::{ShiftProposal, ShiftSmart};
pub use stats::MoveStats;
pub use swap_smart::{SwapProposal, SwapSmart};
pub use switch::{Switch, SwitchProposal};
pub use types::{Move, MoveProposal};
