//! Shared helpers for decant benchmark suites.

use decant_harness::contract::Puzzle;
use decant_kernel::jug::capacity::JugCapacities;

/// A named puzzle size used across benchmark groups.
#[derive(Debug, Clone, Copy)]
pub struct Regime {
    pub name: &'static str,
    pub puzzle: Puzzle,
}

const fn regime(name: &'static str, large: u32, small: u32, target: u32) -> Regime {
    Regime {
        name,
        puzzle: Puzzle {
            caps: JugCapacities::new(large, small),
            target,
        },
    }
}

/// Regimes from a few dozen states to a few hundred thousand.
///
/// `early_goal` reaches its target within a handful of levels, so the lazy
/// strategy touches a small fraction of the state space. `unreachable` forces
/// both strategies to exhaust every reachable state.
pub const REGIMES: &[Regime] = &[
    regime("tiny_4_3", 4, 3, 2),
    regime("mid_97_31", 97, 31, 5),
    regime("early_goal_600_599", 600, 599, 1),
    regime("unreachable_500_250", 500, 250, 3),
    regime("large_999_400", 999, 400, 7),
];
