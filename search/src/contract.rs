//! Successor source contract: the one seam between search and strategy.

use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;

use crate::strategy::Strategy;

/// Work and memory counters reported by a successor source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// State records held in memory when the search ends.
    pub states_materialized: u64,
    /// Directed edges held or emitted.
    pub edges_materialized: u64,
    /// Raw candidates derived from the state space model.
    pub candidates_generated: u64,
    /// Candidates dropped because the target was already known.
    pub duplicates_suppressed: u64,
    /// Calls to [`SuccessorSource::successors`].
    pub lookups: u64,
}

/// Trait for anything that can answer "sorted successors of X".
///
/// # Contract
///
/// - Returned states are sorted ascending by `(big, small)` and contain no
///   duplicates.
/// - Every returned state lies inside [`SuccessorSource::capacities`].
/// - Same call sequence gives same results: sources are deterministic.
pub trait SuccessorSource {
    /// Which strategy this source implements.
    fn strategy(&self) -> Strategy;

    /// The capacities this source was built for.
    fn capacities(&self) -> JugCapacities;

    /// Sorted successors of `state`.
    ///
    /// Out-of-bounds states yield an empty list.
    fn successors(&mut self, state: JugState) -> Vec<JugState>;

    /// Counters accumulated so far.
    fn stats(&self) -> SourceStats;
}
