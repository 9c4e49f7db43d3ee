//! `TransitionGraph`: the fully materialized state graph (eager strategy).
//!
//! Every combinatorial state `(big, small)` gets a [`VertexRecord`] in an
//! arena indexed by `big * (S + 1) + small`, including states that are not
//! reachable from `(0, 0)`. Building the whole arena before searching is the
//! cost the eager strategy pays in exchange for O(1) neighbor lookups.

use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::apply::candidates;

use crate::contract::{SourceStats, SuccessorSource};
use crate::error::SearchError;
use crate::strategy::Strategy;

/// One state and its sorted outgoing neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexRecord {
    pub state: JugState,
    neighbors: Vec<JugState>,
}

impl VertexRecord {
    /// Neighbors sorted ascending by `(big, small)`.
    #[must_use]
    pub fn neighbors(&self) -> &[JugState] {
        &self.neighbors
    }
}

/// The complete transition graph for one capacity pair. Immutable once built.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    caps: JugCapacities,
    vertices: Vec<VertexRecord>,
    build_stats: SourceStats,
}

impl TransitionGraph {
    /// Materialize all `(L + 1) * (S + 1)` states and every legal edge.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StateSpaceTooLarge`] before allocating anything
    /// if the state space exceeds the dense table limit.
    pub fn build(caps: JugCapacities) -> Result<Self, SearchError> {
        SearchError::check_state_limit(caps)?;
        let mut vertices: Vec<VertexRecord> = caps
            .states()
            .map(|state| VertexRecord {
                state,
                neighbors: Vec::new(),
            })
            .collect();

        let mut build_stats = SourceStats::default();
        for vertex in &mut vertices {
            for candidate in candidates(vertex.state, caps) {
                build_stats.candidates_generated += 1;
                if vertex.neighbors.contains(&candidate.to) {
                    build_stats.duplicates_suppressed += 1;
                    continue;
                }
                vertex.neighbors.push(candidate.to);
            }
            vertex.neighbors.sort_unstable();
            build_stats.edges_materialized += vertex.neighbors.len() as u64;
        }
        build_stats.states_materialized = vertices.len() as u64;

        tracing::debug!(
            large = caps.large(),
            small = caps.small(),
            vertices = build_stats.states_materialized,
            edges = build_stats.edges_materialized,
            "transition graph built"
        );

        Ok(Self {
            caps,
            vertices,
            build_stats,
        })
    }

    #[must_use]
    pub fn capacities(&self) -> JugCapacities {
        self.caps
    }

    /// The record for `state`, or `None` if it is out of bounds.
    #[must_use]
    pub fn vertex(&self, state: JugState) -> Option<&VertexRecord> {
        self.caps.index_of(state).map(|i| &self.vertices[i])
    }

    /// Precomputed sorted neighbors of `state`, or `None` if it is out of bounds.
    #[must_use]
    pub fn neighbors_of(&self, state: JugState) -> Option<&[JugState]> {
        self.vertex(state).map(VertexRecord::neighbors)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Counters from construction.
    #[must_use]
    pub fn build_stats(&self) -> SourceStats {
        self.build_stats
    }
}

/// One line per state: `(b, s) -> (x, y) (x, y) `.
impl std::fmt::Display for TransitionGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{} -> ", vertex.state)?;
            for neighbor in &vertex.neighbors {
                write!(f, "{neighbor} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Eager successor source: read-only lookups into a built graph.
#[derive(Debug)]
pub struct EagerSuccessors<'g> {
    graph: &'g TransitionGraph,
    lookups: u64,
}

impl<'g> EagerSuccessors<'g> {
    #[must_use]
    pub fn new(graph: &'g TransitionGraph) -> Self {
        Self { graph, lookups: 0 }
    }
}

impl SuccessorSource for EagerSuccessors<'_> {
    fn strategy(&self) -> Strategy {
        Strategy::Eager
    }

    fn capacities(&self) -> JugCapacities {
        self.graph.capacities()
    }

    fn successors(&mut self, state: JugState) -> Vec<JugState> {
        self.lookups += 1;
        self.graph
            .neighbors_of(state)
            .map(<[JugState]>::to_vec)
            .unwrap_or_default()
    }

    fn stats(&self) -> SourceStats {
        SourceStats {
            lookups: self.lookups,
            ..self.graph.build_stats()
        }
    }
}
