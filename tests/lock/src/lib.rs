//! Shared helpers for lock tests: a reference BFS oracle and the fixture
//! puzzle table used by in-process and cross-process determinism checks.

use std::collections::{HashMap, VecDeque};

use decant_harness::contract::Puzzle;
use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::apply::apply;
use decant_kernel::operators::operation::Operation;

/// Puzzles printed by `solve_fixture`, as `(L, S, W)`.
pub const FIXTURE_PUZZLES: &[(u32, u32, u32)] = &[
    (4, 3, 2),
    (5, 3, 4),
    (6, 2, 5),
    (7, 5, 1),
    (9, 4, 6),
    (10, 6, 3),
];

#[must_use]
pub fn fixture_puzzle(large: u32, small: u32, target: u32) -> Puzzle {
    Puzzle {
        caps: JugCapacities::new(large, small),
        target,
    }
}

/// Distances from `(0, 0)` computed with a plain queue over [`apply`].
///
/// Shares nothing with the search crate beyond the operation semantics, so
/// it acts as an independent oracle for path lengths.
#[must_use]
pub fn oracle_distances(caps: JugCapacities) -> HashMap<JugState, u32> {
    let mut distance = HashMap::from([(JugState::EMPTY, 0)]);
    let mut queue = VecDeque::from([JugState::EMPTY]);
    while let Some(current) = queue.pop_front() {
        let next_distance = distance[&current] + 1;
        for op in Operation::ALL {
            if let Some(next) = apply(op, current, caps) {
                distance.entry(next).or_insert_with(|| {
                    queue.push_back(next);
                    next_distance
                });
            }
        }
    }
    distance
}

/// Whether `(W, 0)` is reachable, by the gcd law.
#[must_use]
pub fn gcd_says_reachable(caps: JugCapacities, target: u32) -> bool {
    if target > caps.large() {
        return false;
    }
    let g = caps.gcd();
    target == 0 || (g != 0 && target % g == 0)
}
