//! Search entry point and expansion loop.
//!
//! One breadth-first traversal serves both strategies: the loop only asks
//! its [`SuccessorSource`] for sorted neighbors and never knows whether they
//! come from a prebuilt graph or from on-demand generation.

use decant_kernel::jug::state::JugState;

use crate::contract::{SourceStats, SuccessorSource};
use crate::error::SearchError;
use crate::frontier::{BreadthFirstFrontier, DistanceTable};
use crate::strategy::Strategy;

/// Why the traversal stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The goal state was popped from the frontier.
    GoalReached,
    /// The frontier emptied without reaching the goal: provably unreachable.
    FrontierExhausted,
}

impl TerminationReason {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// Aggregate counters for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub strategy: Strategy,
    /// Frontier pops that led to a successor request.
    pub expansions: u64,
    /// States handed back by the successor source.
    pub successors_emitted: u64,
    /// States that received a distance, root included.
    pub states_discovered: u64,
    /// Largest frontier length observed.
    pub frontier_high_water: u64,
    /// Counters reported by the successor source.
    pub source: SourceStats,
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub termination: TerminationReason,
    /// Root-to-goal states; `Some` only when the goal was reached.
    pub path: Option<Vec<JugState>>,
    /// Final BFS distances for every discovered state.
    pub distances: DistanceTable,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Number of operations on the found path.
    #[must_use]
    pub fn operation_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// Breadth-first search from `start` to `goal` over `source`.
///
/// Neighbors are expanded in the order the source returns them (ascending
/// `(big, small)`), and each state keeps the first parent that reached it, so
/// the returned path is the same canonical shortest path on every run.
///
/// A goal outside the source's capacities can never be popped, so the
/// traversal drains the frontier and reports it unreachable.
///
/// # Errors
///
/// Returns [`SearchError::StateSpaceTooLarge`] if the capacities exceed the
/// dense table limit, or [`SearchError::StateOutOfBounds`] if `start` lies
/// outside them. No traversal happens in either case.
pub fn search(
    start: JugState,
    goal: JugState,
    source: &mut dyn SuccessorSource,
) -> Result<SearchResult, SearchError> {
    let caps = source.capacities();
    SearchError::check_state_limit(caps)?;
    let mut frontier =
        BreadthFirstFrontier::new(caps, start).ok_or(SearchError::StateOutOfBounds {
            state: start,
            large: caps.large(),
            small: caps.small(),
        })?;

    let mut expansions: u64 = 0;
    let mut successors_emitted: u64 = 0;

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        if current == goal {
            break TerminationReason::GoalReached;
        }

        let successors = source.successors(current);
        expansions += 1;
        successors_emitted += successors.len() as u64;
        for next in successors {
            frontier.discover(next, current);
        }
        tracing::trace!(
            state = %current,
            distance = frontier.distance_of(current),
            frontier = frontier.len(),
            "expanded"
        );
    };

    let path = match termination {
        TerminationReason::GoalReached => frontier.path_to(goal),
        TerminationReason::FrontierExhausted => None,
    };
    let stats = SearchStats {
        strategy: source.strategy(),
        expansions,
        successors_emitted,
        states_discovered: frontier.discovered() as u64,
        frontier_high_water: frontier.high_water() as u64,
        source: source.stats(),
    };

    let result = SearchResult {
        termination,
        path,
        distances: frontier.into_distance_table(),
        stats,
    };
    tracing::debug!(
        strategy = %stats.strategy,
        termination = termination.code(),
        expansions,
        discovered = stats.states_discovered,
        operations = result.operation_count(),
        "search finished"
    );
    Ok(result)
}
