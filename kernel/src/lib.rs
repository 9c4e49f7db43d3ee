//! Decant Kernel: the state space model of the two-jug pouring puzzle.
//!
//! # API Surface
//!
//! - [`operators::apply::candidates`] -- every state one legal operation away
//! - [`operators::apply::apply`] -- apply a single operation to a state
//! - [`proof::replay::replay_verify`] -- verify a recorded path by replay
//!
//! # Module Dependency Direction
//!
//! `jug` ← `operators` ← `proof`
//!
//! One-way only. `jug` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod jug;
pub mod operators;
pub mod proof;
