//! Decant Harness: puzzle-level orchestration over the search core.
//!
//! The harness validates user input, picks a successor source for the
//! requested strategy, runs the search, labels and replay-verifies the path,
//! and renders the result.
//!
//! The harness does NOT implement search logic; it delegates to
//! `decant_search`, which in turn derives every transition from the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod render;
pub mod runner;
