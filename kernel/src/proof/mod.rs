//! Proof layer: path replay against the operation semantics.

pub mod replay;
