//! Concrete puzzles with known answers, solved end to end.

use decant_harness::contract::{InputError, PuzzleInput};
use decant_harness::render::render;
use decant_harness::runner::{solve, Solution};
use decant_kernel::jug::capacity::JugCapacities;
use decant_kernel::jug::state::JugState;
use decant_kernel::operators::operation::Operation;
use decant_search::graph::TransitionGraph;
use decant_search::lazy::LazySuccessors;
use decant_search::search::{search, TerminationReason};
use decant_search::strategy::Strategy;

const BOTH: [Strategy; 2] = [Strategy::Eager, Strategy::Lazy];

#[test]
fn four_three_two_takes_six_operations() {
    for strategy in BOTH {
        let solution = solve(JugCapacities::new(4, 3), 2, strategy).unwrap();
        let Solution::Solved {
            operation_count,
            operations,
            path,
        } = solution
        else {
            panic!("{strategy}: expected a solution");
        };
        assert_eq!(operation_count, 6);
        assert_eq!(
            operations,
            vec![
                Operation::FillSmall,
                Operation::TransferSmallToLarge,
                Operation::FillSmall,
                Operation::TransferSmallToLarge,
                Operation::EmptyLarge,
                Operation::TransferSmallToLarge,
            ]
        );
        assert_eq!(path.first(), Some(&JugState::EMPTY));
        assert_eq!(path.last(), Some(&JugState::goal(2)));
    }
}

#[test]
fn four_three_two_renders_labels() {
    let solution = solve(JugCapacities::new(4, 3), 2, Strategy::Eager).unwrap();
    assert_eq!(
        render(&solution),
        "Number of operations: 6\n\
         Operations:\n\
         1. Fill small jug\n\
         2. Transfer from small jug to large jug\n\
         3. Fill small jug\n\
         4. Transfer from small jug to large jug\n\
         5. Empty large jug\n\
         6. Transfer from small jug to large jug\n"
    );
}

#[test]
fn zero_target_is_already_solved() {
    for strategy in BOTH {
        let solution = solve(JugCapacities::new(1, 1), 0, strategy).unwrap();
        assert_eq!(solution.operation_count(), Some(0));
        assert_eq!(render(&solution), "Number of operations: 0\nOperations:\n");
    }
}

#[test]
fn equal_capacities_are_rejected_as_input() {
    let input = PuzzleInput {
        large: 1,
        small: 1,
        target: 0,
    };
    assert!(input.validate().is_err());
}

#[test]
fn small_larger_than_large_still_searches_to_no_solution() {
    // (L=2, S=6, W=5): the input layer rejects it, the core search still answers.
    let caps = JugCapacities::new(2, 6);
    assert!(!caps.contains(JugState::goal(5)));
    for strategy in BOTH {
        assert_eq!(solve(caps, 5, strategy), Ok(Solution::NoSolution));
        assert_eq!(solve(caps, 1, strategy), Ok(Solution::NoSolution));
    }

    let mut source = LazySuccessors::new(caps, JugState::EMPTY);
    let result = search(JugState::EMPTY, JugState::goal(5), &mut source).unwrap();
    assert_eq!(result.termination, TerminationReason::FrontierExhausted);
    assert_eq!(result.distances.get(JugState::new(2, 6)), Some(2));
}

#[test]
fn oversized_input_is_rejected_before_solving() {
    let max = i64::from(u32::MAX);
    let input = PuzzleInput {
        large: max,
        small: max - 1,
        target: 1,
    };
    assert!(matches!(
        input.validate(),
        Err(InputError::StateSpaceTooLarge { .. })
    ));
    for strategy in BOTH {
        assert!(solve(JugCapacities::new(u32::MAX, u32::MAX - 1), 1, strategy).is_err());
    }
}

#[test]
fn gcd_two_cannot_make_odd_amounts() {
    for strategy in BOTH {
        assert_eq!(
            solve(JugCapacities::new(6, 2), 5, strategy).unwrap(),
            Solution::NoSolution
        );
    }
    assert_eq!(render(&Solution::NoSolution), "No solution.\n");
}

#[test]
fn five_three_four_matches_classic_answer() {
    for strategy in BOTH {
        let solution = solve(JugCapacities::new(5, 3), 4, strategy).unwrap();
        assert_eq!(solution.operation_count(), Some(6));
    }
}

#[test]
fn full_graph_covers_every_state() {
    let graph = TransitionGraph::build(JugCapacities::new(4, 3)).unwrap();
    assert_eq!(graph.vertex_count(), 20);
    // (0, 0) can only fill one of the jugs.
    assert_eq!(
        graph.neighbors_of(JugState::EMPTY),
        Some(&[JugState::new(0, 3), JugState::new(4, 0)][..])
    );
}
