//! Runner: executes one strategy end to end and hands back a solution.
//!
//! Phases:
//! 1. Construct the successor source for the chosen strategy.
//! 2. Breadth-first search from `(0, 0)` to `(W, 0)`.
//! 3. Label each step and replay the labeled path through the kernel.
//!    A path that fails replay is a runner bug and is reported, never printed.
//!
//! Every run owns its graph, visited set, and tables; all of them are dropped
//! before `run` returns.

use std::time::{Duration, Instant};

use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::operation::Operation;
use decant_kernel::proof::replay::{replay_verify, ReplayError};
use decant_search::classify::label_path;
use decant_search::error::SearchError;
use decant_search::graph::{EagerSuccessors, TransitionGraph};
use decant_search::lazy::LazySuccessors;
use decant_search::search::{search, SearchResult, SearchStats};
use decant_search::strategy::Strategy;

use crate::contract::Puzzle;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Pre-flight search failure.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The labeled path did not replay to the recorded states.
    #[error("solution path failed replay: {0}")]
    ReplayDivergence(#[from] ReplayError),
}

/// Outcome of solving one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// A shortest operation sequence from `(0, 0)` to `(W, 0)`.
    Solved {
        operation_count: usize,
        operations: Vec<Operation>,
        path: Vec<JugState>,
    },
    /// `(W, 0)` is unreachable.
    NoSolution,
}

impl Solution {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub fn operation_count(&self) -> Option<usize> {
        match self {
            Self::Solved {
                operation_count, ..
            } => Some(*operation_count),
            Self::NoSolution => None,
        }
    }
}

/// Runner options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunConfig {
    /// Measure wall-clock time of the strategy run (source construction + search).
    pub measure_time: bool,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub puzzle: Puzzle,
    pub strategy: Strategy,
    pub solution: Solution,
    pub stats: SearchStats,
    /// Present only when [`RunConfig::measure_time`] was set.
    pub elapsed: Option<Duration>,
}

/// Solve `(L, S, W)` with the given strategy.
///
/// # Errors
///
/// Returns [`RunError`] if the goal lies outside the capacities or the found
/// path fails replay verification.
pub fn solve(caps: JugCapacities, target: u32, strategy: Strategy) -> Result<Solution, RunError> {
    let puzzle = Puzzle { caps, target };
    run(&puzzle, strategy, &RunConfig::default()).map(|outcome| outcome.solution)
}

/// Run a validated puzzle through the full pipeline.
///
/// # Errors
///
/// Returns [`RunError`] at any phase. Fail-closed: no partial solution is
/// returned.
pub fn run(
    puzzle: &Puzzle,
    strategy: Strategy,
    config: &RunConfig,
) -> Result<RunOutcome, RunError> {
    tracing::info!(
        large = puzzle.caps.large(),
        small = puzzle.caps.small(),
        target = puzzle.target,
        %strategy,
        "run started"
    );

    // Phases 1 + 2: the only part that is timed.
    let started = config.measure_time.then(Instant::now);
    let result = search_with(puzzle, strategy)?;
    let elapsed = started.map(|t| t.elapsed());

    // Phase 3: label and verify.
    let solution = to_solution(puzzle.caps, &result)?;

    tracing::info!(
        solved = solution.is_solved(),
        operations = solution.operation_count(),
        elapsed = ?elapsed,
        "run finished"
    );

    Ok(RunOutcome {
        puzzle: *puzzle,
        strategy,
        solution,
        stats: result.stats,
        elapsed,
    })
}

fn search_with(puzzle: &Puzzle, strategy: Strategy) -> Result<SearchResult, SearchError> {
    match strategy {
        Strategy::Eager => {
            let graph = TransitionGraph::build(puzzle.caps)?;
            let mut source = EagerSuccessors::new(&graph);
            search(JugState::EMPTY, puzzle.goal(), &mut source)
        }
        Strategy::Lazy => {
            let mut source = LazySuccessors::new(puzzle.caps, JugState::EMPTY);
            search(JugState::EMPTY, puzzle.goal(), &mut source)
        }
    }
}

fn to_solution(caps: JugCapacities, result: &SearchResult) -> Result<Solution, RunError> {
    let Some(path) = &result.path else {
        return Ok(Solution::NoSolution);
    };
    let operations = label_path(path, caps);
    let steps: Vec<(Operation, JugState)> = operations
        .iter()
        .copied()
        .zip(path.iter().skip(1).copied())
        .collect();
    replay_verify(caps, JugState::EMPTY, &steps)?;

    Ok(Solution::Solved {
        operation_count: operations.len(),
        operations,
        path: path.clone(),
    })
}
