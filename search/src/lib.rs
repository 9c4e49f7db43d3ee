//! Decant Search: shortest operation sequences over the jug state space.
//!
//! # Crate dependency graph
//!
//! ```text
//! decant_kernel  ←  decant_search  ←  decant_harness
//! (state model)     (sources, BFS)     (solve, render)
//! ```
//!
//! # Key types
//!
//! - [`SuccessorSource`](contract::SuccessorSource) -- sorted neighbors of a state
//! - [`TransitionGraph`](graph::TransitionGraph) / [`EagerSuccessors`](graph::EagerSuccessors) -- eager strategy
//! - [`LazySuccessors`](lazy::LazySuccessors) -- lazy strategy
//! - [`BreadthFirstFrontier`](frontier::BreadthFirstFrontier) -- FIFO queue with distance/parent tables
//! - [`search`](search::search) -- the single traversal shared by both strategies
//! - [`classify`](classify::classify) -- label a step from its endpoint states

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod lazy;
pub mod search;
pub mod strategy;
