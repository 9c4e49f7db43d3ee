//! `LazySuccessors`: on-demand successor generation with a visited set.
//!
//! No state is materialized until the traversal reaches it. A candidate is
//! marked visited the moment it is emitted, not when the caller later
//! expands it, so a state discovered by two frontier nodes in the same layer
//! is emitted exactly once.

use std::collections::HashSet;

use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::apply::candidates;

use crate::contract::{SourceStats, SuccessorSource};
use crate::strategy::Strategy;

/// Lazy successor source scoped to a single search.
#[derive(Debug, Clone)]
pub struct LazySuccessors {
    caps: JugCapacities,
    visited: HashSet<JugState>,
    stats: SourceStats,
}

impl LazySuccessors {
    /// Create a source whose visited set is seeded with `start`.
    #[must_use]
    pub fn new(caps: JugCapacities, start: JugState) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            caps,
            visited,
            stats: SourceStats {
                states_materialized: 1,
                ..SourceStats::default()
            },
        }
    }

    /// Sorted successors of `state` that have never been emitted before.
    ///
    /// Every returned state is marked visited before this returns.
    pub fn successors_of(&mut self, state: JugState) -> Vec<JugState> {
        if !self.caps.contains(state) {
            return Vec::new();
        }
        let mut fresh = Vec::with_capacity(6);
        for candidate in candidates(state, self.caps) {
            self.stats.candidates_generated += 1;
            if self.visited.insert(candidate.to) {
                fresh.push(candidate.to);
            } else {
                self.stats.duplicates_suppressed += 1;
            }
        }
        fresh.sort_unstable();
        self.stats.edges_materialized += fresh.len() as u64;
        self.stats.states_materialized = self.visited.len() as u64;
        fresh
    }
}

impl SuccessorSource for LazySuccessors {
    fn strategy(&self) -> Strategy {
        Strategy::Lazy
    }

    fn capacities(&self) -> JugCapacities {
        self.caps
    }

    fn successors(&mut self, state: JugState) -> Vec<JugState> {
        self.stats.lookups += 1;
        self.successors_of(state)
    }

    fn stats(&self) -> SourceStats {
        self.stats
    }
}
