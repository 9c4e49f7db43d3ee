use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use decant_harness::contract::{Puzzle, PuzzleInput};
use decant_harness::render::render;
use decant_harness::runner::{run, RunConfig};
use decant_search::graph::TransitionGraph;
use decant_search::strategy::Strategy;
use tracing::Level;

mod prompt;

#[derive(Parser)]
#[command(name = "decant")]
#[command(about = "Shortest fill/empty/transfer sequence for the two-jug puzzle")]
struct Cmd {
    /// Capacity of the large jug (L); prompted if omitted
    #[arg(long, short = 'l', allow_negative_numbers = true)]
    large: Option<i64>,
    /// Capacity of the small jug (S); prompted if omitted
    #[arg(long, short = 's', allow_negative_numbers = true)]
    small: Option<i64>,
    /// Desired amount in the large jug (W); prompted if omitted
    #[arg(long, short = 'w', allow_negative_numbers = true)]
    target: Option<i64>,
    /// 1 or "eager" (full graph), 2 or "lazy" (on-the-fly); prompted if omitted
    #[arg(long)]
    strategy: Option<String>,
    /// Report the wall-clock time of the strategy run
    #[arg(long)]
    time: bool,
    /// Print the full transition graph before solving
    #[arg(long)]
    print_graph: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout().lock();
    execute(&cmd, &mut input, &mut stdout)
}

fn execute<R: BufRead, W: Write>(cmd: &Cmd, input: &mut R, out: &mut W) -> Result<()> {
    let interactive =
        cmd.large.is_none() || cmd.small.is_none() || cmd.target.is_none() || cmd.strategy.is_none();

    let raw = PuzzleInput {
        large: value_or_ask(cmd.large, input, out, "Enter L (capacity of large jug): ")?,
        small: value_or_ask(cmd.small, input, out, "Enter S (capacity of small jug): ")?,
        target: value_or_ask(cmd.target, input, out, "Enter W (desired amount in large jug): ")?,
    };
    let puzzle = raw.validate()?;

    let strategy = match &cmd.strategy {
        Some(name) => name.parse::<Strategy>()?,
        None => Strategy::from_selector(prompt::ask_integer(
            input,
            out,
            "Enter Way (1 for full graph, 2 for on-the-fly): ",
        )?)?,
    };

    let measure_time = cmd.time
        || (interactive
            && prompt::ask_flag(
                input,
                out,
                "Do you want to measure time? (1 = yes, 0 = no): ",
            )?);

    if interactive {
        writeln!(
            out,
            "You selected: L = {}, S = {}, W = {}, Way = {}, Time = {}\n\n",
            raw.large,
            raw.small,
            raw.target,
            strategy.selector(),
            if measure_time { "yes" } else { "no" }
        )?;
    }

    if cmd.print_graph {
        print_graph(&puzzle, out)?;
    }

    let outcome = run(&puzzle, strategy, &RunConfig { measure_time })?;
    out.write_all(render(&outcome.solution).as_bytes())?;
    if let Some(elapsed) = outcome.elapsed {
        writeln!(out, "Function took {} microseconds.", elapsed.as_micros())?;
    }
    Ok(())
}

fn value_or_ask<R: BufRead, W: Write>(
    given: Option<i64>,
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<i64> {
    match given {
        Some(value) => Ok(value),
        None => prompt::ask_integer(input, out, label),
    }
}

fn print_graph<W: Write>(puzzle: &Puzzle, out: &mut W) -> Result<()> {
    let graph = TransitionGraph::build(puzzle.caps)?;
    write!(out, "{graph}")?;
    writeln!(out, "{} states, {} edges\n", graph.vertex_count(), graph.edge_count())?;
    Ok(())
}
