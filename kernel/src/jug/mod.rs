//! Jug carrier types: capacities and the `(big, small)` state pair.

pub mod capacity;
pub mod state;
