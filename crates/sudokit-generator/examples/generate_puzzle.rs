//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator` with a board size and removal fraction
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the puzzle, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a board size (must be a perfect square) and removal fraction:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 16 --fraction 0.6
//! ```
//!
//! Reproduce a puzzle from its 64-character hex seed, or derive a seed from
//! a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <HEX>
//! cargo run --example generate_puzzle -- --phrase "daily 2024-01-01"
//! ```

use std::process;

use clap::Parser;
use sudokit_core::BoardSize;
use sudokit_generator::{GeneratedPuzzle, PuzzleCarver, PuzzleGenerator, PuzzleSeed};
use sudokit_solver::BoardSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length (a perfect square: 4, 9, 16, 25, ...).
    #[arg(long, value_name = "SIDE", default_value_t = 9)]
    size: usize,

    /// Fraction of cells to blank, in the open interval (0, 1).
    #[arg(long, value_name = "FRACTION", default_value_t = 0.5)]
    fraction: f64,

    /// Reproduce the puzzle a 64-character hex seed denotes.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase instead of drawing one at random.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match BoardSize::new(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("invalid --size: {err}");
            process::exit(2);
        }
    };
    let carver = match PuzzleCarver::new(args.fraction) {
        Ok(carver) => carver,
        Err(err) => {
            eprintln!("invalid --fraction: {err}");
            process::exit(2);
        }
    };

    let seed = match (&args.seed, &args.phrase) {
        (Some(hex), _) => match hex.parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("invalid --seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => Some(PuzzleSeed::from_phrase(phrase)),
        (None, None) => None,
    };

    let generator = PuzzleGenerator::with_parts(BoardSolver::new(), carver);
    let result = match seed {
        Some(seed) => generator.generate_with_seed(size, seed),
        None => generator.generate(size),
    };
    match result {
        Ok(generated) => print_puzzle(&generated),
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle ({} cells blanked):", generated.puzzle.empty_count());
    println!("  {}", generated.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", generated.solution);
}
