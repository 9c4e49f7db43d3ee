//! Every returned path replays under the operation semantics, and BFS
//! distances along it grow by exactly one per step.

use decant_harness::runner::{solve, Solution};
use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::apply::candidates;
use decant_kernel::proof::replay::{replay_verify, ReplayError};
use decant_search::classify::classify;
use decant_search::graph::{EagerSuccessors, TransitionGraph};
use decant_search::lazy::LazySuccessors;
use decant_search::search::search;
use decant_search::strategy::Strategy;

#[test]
fn solved_paths_replay_to_goal() {
    for large in 1..=9 {
        for small in 0..large {
            let caps = JugCapacities::new(large, small);
            for target in 0..=large {
                let Solution::Solved {
                    operations, path, ..
                } = solve(caps, target, Strategy::Lazy).unwrap()
                else {
                    continue;
                };
                let steps: Vec<_> = operations
                    .iter()
                    .copied()
                    .zip(path.iter().skip(1).copied())
                    .collect();
                assert_eq!(
                    replay_verify(caps, JugState::EMPTY, &steps),
                    Ok(JugState::goal(target))
                );
            }
        }
    }
}

#[test]
fn classified_label_produces_the_recorded_step() {
    let caps = JugCapacities::new(7, 4);
    for state in caps.states() {
        for candidate in candidates(state, caps) {
            let op = classify(state, candidate.to, caps);
            assert_eq!(
                replay_verify(caps, state, &[(op, candidate.to)]),
                Ok(candidate.to),
                "{state} -> {}",
                candidate.to
            );
        }
    }
}

#[test]
fn tampered_path_fails_replay() {
    let caps = JugCapacities::new(4, 3);
    let Solution::Solved {
        operations,
        mut path,
        ..
    } = solve(caps, 2, Strategy::Eager).unwrap()
    else {
        panic!("expected a solution");
    };
    path[3] = JugState::new(1, 1);
    let steps: Vec<_> = operations
        .iter()
        .copied()
        .zip(path.iter().skip(1).copied())
        .collect();
    assert!(matches!(
        replay_verify(caps, JugState::EMPTY, &steps),
        Err(ReplayError::StepMismatch { step: 2, .. })
    ));
}

#[test]
fn distance_grows_by_one_along_path() {
    let caps = JugCapacities::new(11, 7);
    let graph = TransitionGraph::build(caps).unwrap();
    let mut eager = EagerSuccessors::new(&graph);
    let mut lazy = LazySuccessors::new(caps, JugState::EMPTY);
    let goal = JugState::goal(6);
    for result in [
        search(JugState::EMPTY, goal, &mut eager).unwrap(),
        search(JugState::EMPTY, goal, &mut lazy).unwrap(),
    ] {
        let path = result.path.as_ref().unwrap();
        for (i, state) in path.iter().enumerate() {
            assert_eq!(result.distances.get(*state), Some(u32::try_from(i).unwrap()));
        }
    }
}
