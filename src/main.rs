//! Rubik's Cube Solver
//!
//! Scrambles a cube (or applies a given move sequence) and plans the daisy
//! and white cross stages, printing the cube as an unfolded net before and
//! after the plan is played back.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rubik::net::format_cube;
use rubik::notation::{format_moves, parse};
use rubik::shuffler::{Shuffler, SHUFFLE_MOVES};
use rubik::{solve, Cube, CubeFactory};

/// Scrambles a 3x3x3 cube and solves its daisy and white cross.
#[derive(Parser)]
#[command(name = "rubik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scramble a solved cube, then plan and replay the white cross.
    Solve {
        /// Seed for the scramble; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of random quarter turns in the scramble.
        #[arg(long, default_value_t = SHUFFLE_MOVES)]
        moves: usize,
    },
    /// Apply a move sequence such as "R U' F2 y" to a solved cube and print it.
    Apply {
        /// Whitespace separated moves.
        sequence: String,
        /// Also plan and replay the white cross afterwards.
        #[arg(long)]
        solve: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { seed, moves }) => run_solve(seed, moves),
        Some(Command::Apply {
            sequence,
            solve: then_solve,
        }) => run_apply(&sequence, then_solve)?,
        None => run_solve(None, SHUFFLE_MOVES),
    }

    Ok(())
}

/// Scrambles with the given seed and solves.
fn run_solve(seed: Option<u64>, moves: usize) {
    let seed = seed.unwrap_or_else(rand::random);
    info!("scrambling with seed {seed}");

    let mut cube = CubeFactory::new().create_cube();
    Shuffler::with_moves(StdRng::seed_from_u64(seed), moves).shuffle(&mut cube);

    println!("Scramble (seed {seed}): {}", format_moves(cube.moves()));
    print!("{}", format_cube(&cube));
    println!();
    run_plan(&mut cube);
}

/// Applies a parsed sequence to a solved cube.
fn run_apply(sequence: &str, then_solve: bool) -> anyhow::Result<()> {
    let moves = parse(sequence).with_context(|| format!("invalid move sequence {sequence:?}"))?;

    let mut cube = CubeFactory::new().create_cube();
    for cube_move in moves {
        cube.push_move(cube_move);
    }
    cube.play_all_moves();

    println!("Applied: {}", format_moves(cube.moves()));
    print!("{}", format_cube(&cube));

    if then_solve {
        println!();
        run_plan(&mut cube);
    }
    Ok(())
}

/// Plans the white cross, replays it on `cube` and prints the result.
fn run_plan(cube: &mut Cube) {
    let plan = solve(cube);
    println!("Solution ({} moves): {}", plan.len(), format_moves(&plan));

    for cube_move in plan {
        cube.push_move(cube_move);
    }
    while let Some(played) = cube.play_next_move() {
        log::trace!("replayed {played}");
    }

    print!("{}", format_cube(cube));
}
