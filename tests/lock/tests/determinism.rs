//! Same puzzle, same strategy, same answer: in-process repetition and
//! cross-process fixture runs.

use std::process::Command;

use decant_harness::render::render;
use decant_harness::runner::{run, RunConfig};
use decant_search::graph::TransitionGraph;
use decant_search::strategy::Strategy;
use lock_tests::{fixture_puzzle, FIXTURE_PUZZLES};

fn rendered(large: u32, small: u32, target: u32, strategy: Strategy) -> String {
    let puzzle = fixture_puzzle(large, small, target);
    let outcome = run(&puzzle, strategy, &RunConfig::default()).unwrap();
    render(&outcome.solution)
}

#[test]
fn output_is_identical_across_repeats() {
    for &(large, small, target) in FIXTURE_PUZZLES {
        for strategy in [Strategy::Eager, Strategy::Lazy] {
            let first = rendered(large, small, target, strategy);
            for _ in 0..5 {
                assert_eq!(first, rendered(large, small, target, strategy));
            }
        }
    }
}

#[test]
fn timing_does_not_change_the_answer() {
    let puzzle = fixture_puzzle(9, 4, 6);
    let timed = run(&puzzle, Strategy::Lazy, &RunConfig { measure_time: true }).unwrap();
    let untimed = run(&puzzle, Strategy::Lazy, &RunConfig::default()).unwrap();
    assert!(timed.elapsed.is_some());
    assert!(untimed.elapsed.is_none());
    assert_eq!(timed.solution, untimed.solution);
    assert_eq!(timed.stats, untimed.stats);
}

#[test]
fn graph_rebuild_is_stable() {
    let caps = fixture_puzzle(10, 6, 3).caps;
    let a = TransitionGraph::build(caps).unwrap();
    let b = TransitionGraph::build(caps).unwrap();
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.build_stats(), b.build_stats());
}

fn run_fixture(env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");
    let mut command = Command::new(bin);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} ({env_overrides:?}): {e}"));
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_fixture_output_is_stable() {
    let baseline = run_fixture(&[]);
    assert_eq!(baseline.matches("case=").count(), FIXTURE_PUZZLES.len());
    assert!(baseline.contains("operations=none"));
    assert!(baseline.contains("No solution.\n"));

    for variant in [
        &[("LC_ALL", "C")][..],
        &[("LANG", "en_US.UTF-8")][..],
        &[("TZ", "Pacific/Chatham")][..],
    ] {
        assert_eq!(baseline, run_fixture(variant), "variant {variant:?} diverged");
    }
}

#[test]
fn crossproc_matches_in_process_render() {
    let baseline = run_fixture(&[]);
    for strategy in [Strategy::Eager, Strategy::Lazy] {
        let expected = format!("strategy={strategy}\n");
        let start = baseline.find("case=4/3/2").unwrap();
        let section = &baseline[start..];
        let at = section.find(&expected).unwrap();
        assert!(section[at..].contains(&rendered(4, 3, 2, strategy)));
    }
}
