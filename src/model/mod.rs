//! Scheduling model: instance data, machines and solutions.
//!
//! A [`Problem`] is read-only. A [`Solution`] exclusively owns its
//! [`Machine`]s, and each machine exclusively owns its job sequence. Moves
//! address machines and jobs by integer id only.

mod machine;
mod problem;
mod solution;

#[cfg(test)]
pub(crate) mod testing;

pub use machine::Machine;
pub use problem::{Cost, Problem};
pub use solution::{Objective, Solution};
