//! Puzzle generation for the Sudokit engine.
//!
//! [`PuzzleGenerator`] composes the backtracking
//! [`BoardSolver`](sudokit_solver::BoardSolver) with a [`PuzzleCarver`]:
//! the solver fills an empty board into a complete solution, the carver
//! blanks a fraction of its cells, and both grids are returned together as a
//! [`GeneratedPuzzle`]. A [`PuzzleSeed`] pins down every random choice, so a
//! puzzle can be regenerated from its seed alone.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::BoardSize;
//! use sudokit_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(BoardSize::NINE)?;
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.puzzle.empty_count(), 40); // floor(81 * 0.5)
//!
//! // The seed reproduces the exact same puzzle.
//! let again = generator.generate_with_seed(BoardSize::NINE, puzzle.seed)?;
//! assert_eq!(again, puzzle);
//! # Ok::<(), sudokit_solver::SolveError>(())
//! ```

pub mod carver;
pub mod seed;

use sudokit_core::{BoardSize, Grid};
use sudokit_solver::{BoardSolver, SolveError};

pub use self::{
    carver::{DEFAULT_REMOVAL_FRACTION, PuzzleCarver},
    seed::{ParseSeedError, PuzzleSeed},
};

/// A generated puzzle together with its retained solution and the seed that
/// produced it.
///
/// Both grids live for one puzzle session and are replaced wholesale on the
/// next generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, equal to `solution` except at carved (zero) cells.
    pub puzzle: Grid,
    /// The complete solution the puzzle was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles by running the solver and the carver from one seed.
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    solver: BoardSolver,
    carver: PuzzleCarver,
}

impl PuzzleGenerator {
    /// Creates a generator with an unbudgeted solver and the default removal
    /// fraction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from a configured solver and carver.
    #[must_use]
    pub fn with_parts(solver: BoardSolver, carver: PuzzleCarver) -> Self {
        Self { solver, carver }
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] when the solver's budget trips; board size and
    /// removal fraction were already validated at construction, so no other
    /// failure is possible.
    pub fn generate(&self, size: BoardSize) -> Result<GeneratedPuzzle, SolveError> {
        self.generate_with_seed(size, PuzzleSeed::random(&mut rand::rng()))
    }

    /// Generates the puzzle a seed denotes.
    ///
    /// The same seed, size, and removal fraction always produce the same
    /// puzzle and solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] when the solver's budget trips.
    pub fn generate_with_seed(
        &self,
        size: BoardSize,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, SolveError> {
        let mut rng = seed.rng();
        let solution = self.solver.generate_solution(size, &mut rng)?;
        let puzzle = self.carver.carve(&solution, &mut rng);
        log::debug!("generated {size} puzzle from seed {seed}");
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use sudokit_solver::SearchBudget;

    use super::*;

    #[test]
    fn test_generate_produces_consistent_pair() {
        let generator = PuzzleGenerator::new();
        for size in [BoardSize::FOUR, BoardSize::NINE] {
            let generated = generator.generate(size).unwrap();
            assert!(generated.solution.is_solved());
            assert_eq!(generated.puzzle.empty_count(), size.cell_count() / 2);
            for index in 0..size.cell_count() {
                if !generated.puzzle.is_cell_empty(index) {
                    assert_eq!(generated.puzzle.get(index), generated.solution.get(index));
                }
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("reproducible");
        let first = generator.generate_with_seed(BoardSize::NINE, seed).unwrap();
        let second = generator.generate_with_seed(BoardSize::NINE, seed).unwrap();
        assert_eq!(first, second);

        let other_seed = PuzzleSeed::from_phrase("different");
        let third = generator
            .generate_with_seed(BoardSize::NINE, other_seed)
            .unwrap();
        assert_ne!(first.solution, third.solution);
    }

    #[test]
    fn test_generate_respects_solver_budget() {
        let solver = sudokit_solver::BoardSolver::with_budget(
            SearchBudget::new().with_max_steps(10),
        );
        let generator = PuzzleGenerator::with_parts(solver, PuzzleCarver::default());
        let result = generator.generate(BoardSize::NINE);
        assert_eq!(
            result,
            Err(SolveError::BudgetExhausted { max_steps: 10 })
        );
    }

    #[test]
    fn test_custom_fraction() {
        let carver = PuzzleCarver::new(0.25).unwrap();
        let generator = PuzzleGenerator::with_parts(BoardSolver::new(), carver);
        let generated = generator.generate(BoardSize::FOUR).unwrap();
        assert_eq!(generated.puzzle.empty_count(), 4);
    }
}
