//! Eager and lazy strategies must agree on every target, not just on
//! operation counts but on the exact path.

use decant_harness::runner::solve;
use decant_kernel::jug::capacity::JugCapacities;
use decant_search::strategy::Strategy;

#[test]
fn strategies_agree_on_every_target() {
    for large in 1..=12 {
        for small in 0..large {
            let caps = JugCapacities::new(large, small);
            for target in 0..=large {
                let eager = solve(caps, target, Strategy::Eager).unwrap();
                let lazy = solve(caps, target, Strategy::Lazy).unwrap();
                assert_eq!(eager, lazy, "L={large} S={small} W={target}");
            }
        }
    }
}
