//! Operators: the six legal jug operations and how they apply to a state.

pub mod apply;
pub mod operation;
