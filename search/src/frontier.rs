//! Breadth-first frontier with dense distance and parent tables.
//!
//! Tables are indexed by the linear state index, so lookups never hash. A
//! state's distance and parent are written exactly once, at the moment it is
//! first discovered; that single check-and-mark is the only "visit once"
//! guard the search loop needs, whichever successor source feeds it.

use std::collections::VecDeque;

use decant_kernel::jug::capacity::{JugCapacities, MAX_STATE_COUNT};
use decant_kernel::jug::state::JugState;

/// FIFO frontier plus discovery tables.
#[derive(Debug, Clone)]
pub struct BreadthFirstFrontier {
    caps: JugCapacities,
    queue: VecDeque<JugState>,
    distance: Vec<Option<u32>>,
    parent: Vec<Option<JugState>>,
    discovered: usize,
    high_water: usize,
}

impl BreadthFirstFrontier {
    /// Create a frontier holding only `root` at distance 0.
    ///
    /// Returns `None` if `root` lies outside `caps`, or if the state space
    /// exceeds [`MAX_STATE_COUNT`].
    #[must_use]
    pub fn new(caps: JugCapacities, root: JugState) -> Option<Self> {
        if !caps.within_state_limit() {
            return None;
        }
        let root_index = caps.index_of(root)?;
        let n = caps.state_count()?;
        let mut distance = vec![None; n];
        distance[root_index] = Some(0);
        Some(Self {
            caps,
            queue: VecDeque::from([root]),
            distance,
            parent: vec![None; n],
            discovered: 1,
            high_water: 1,
        })
    }

    /// Record `state` as reached from `from` and enqueue it.
    ///
    /// Returns `false` (and changes nothing) if `state` was already
    /// discovered, is out of bounds, or `from` was never discovered.
    pub fn discover(&mut self, state: JugState, from: JugState) -> bool {
        let Some(index) = self.caps.index_of(state) else {
            return false;
        };
        if self.distance[index].is_some() {
            return false;
        }
        let Some(base) = self.distance_of(from) else {
            return false;
        };
        self.distance[index] = Some(base + 1);
        self.parent[index] = Some(from);
        self.queue.push_back(state);
        self.discovered += 1;
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Pop the oldest queued state.
    #[must_use]
    pub fn pop(&mut self) -> Option<JugState> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn distance_of(&self, state: JugState) -> Option<u32> {
        self.caps.index_of(state).and_then(|i| self.distance[i])
    }

    #[must_use]
    pub fn parent_of(&self, state: JugState) -> Option<JugState> {
        self.caps.index_of(state).and_then(|i| self.parent[i])
    }

    /// Walk parent links back from `goal` and return the root-to-goal path.
    ///
    /// Returns `None` if `goal` was never discovered.
    #[must_use]
    pub fn path_to(&self, goal: JugState) -> Option<Vec<JugState>> {
        self.distance_of(goal)?;
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(prev) = self.parent_of(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of states ever discovered, root included.
    #[must_use]
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Largest queue length observed.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Drop the queue and parent table, keeping the distance table.
    #[must_use]
    pub fn into_distance_table(self) -> DistanceTable {
        DistanceTable {
            caps: self.caps,
            distance: self.distance,
        }
    }
}

/// Final BFS distances, kept after the search for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    caps: JugCapacities,
    distance: Vec<Option<u32>>,
}

impl DistanceTable {
    /// Shortest distance from the root, or `None` if never reached.
    #[must_use]
    pub fn get(&self, state: JugState) -> Option<u32> {
        self.caps.index_of(state).and_then(|i| self.distance[i])
    }
}
