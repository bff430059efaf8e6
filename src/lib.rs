//! Incremental move engine for unrelated parallel machine scheduling.
//!
//! Jobs are assigned to machines; each machine's cost depends on the
//! ordered sequence of jobs it holds, through machine-specific processing
//! times and sequence-dependent setup times. This crate proposes, evaluates
//! and reversibly applies local perturbations to such an assignment with
//! exact incremental cost bookkeeping:
//!
//! - **Model**: immutable [`model::Problem`] data, [`model::Machine`]
//!   sequences with cached costs, and [`model::Solution`] aggregating them
//!   under a makespan or total-cost [`model::Objective`].
//! - **Moves**: the propose / accept / reject protocol ([`moves::Move`])
//!   and its neighborhoods, headed by [`moves::SwapSmart`].
//!
//! # Architecture
//!
//! The outer search loop (acceptance criterion, budgets, restarts) is left
//! to the caller. Every operation is synchronous; randomness comes from a
//! generator the caller owns (see [`random::create_rng`]), so runs replay
//! deterministically.

pub mod error;
pub mod model;
pub mod moves;
pub mod random;
