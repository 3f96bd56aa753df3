//! Puzzle session state owned on behalf of the presentation layer.

use sudokit_core::{BoardSize, Grid};
use sudokit_generator::GeneratedPuzzle;

use crate::{InputError, input::parse_cell_input, verify};

/// A rejected session operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The target cell was pre-filled at carving time and is immutable.
    #[display("cell {index} is a given cell and cannot be modified")]
    CannotModifyGivenCell {
        /// Flat index of the given cell.
        index: usize,
    },
    /// The value is outside the board's `1..=N` range.
    #[display("value {value} is outside 1..={max}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u8,
        /// Largest value allowed on this board.
        max: u8,
    },
    /// Puzzle and solution grids have different board sizes.
    #[display("puzzle and solution sizes differ")]
    SizeMismatch,
    /// The solution grid is not a complete valid solution.
    #[display("solution grid is not a complete valid solution")]
    UnsolvedSolution,
    /// A pre-filled puzzle cell disagrees with the solution.
    #[display("puzzle cell {index} disagrees with the solution")]
    PuzzleContradictsSolution {
        /// Flat index of the disagreeing cell.
        index: usize,
    },
    /// Raw input failed to normalize.
    #[display("{_0}")]
    Input(InputError),
}

impl From<InputError> for SessionError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

/// One puzzle session: the playable grid, its retained solution, and the
/// set of given cells.
///
/// The session upholds the invariant that every given cell keeps its
/// solution value: player writes to givens are rejected, so
/// `puzzle[i] == solution[i]` holds for all givens at all times. Carved
/// cells accept any in-range value; correctness is only decided by
/// comparison against the solution, never enforced on input.
///
/// A session is replaced wholesale when a new puzzle is generated or the
/// board size changes.
///
/// # Examples
///
/// ```
/// use sudokit_core::BoardSize;
/// use sudokit_game::Session;
/// use sudokit_generator::PuzzleGenerator;
///
/// let generated = PuzzleGenerator::new().generate(BoardSize::NINE).unwrap();
/// let solution = generated.solution.clone();
/// let mut session = Session::new(generated);
///
/// assert!(!session.is_fully_solved());
/// for index in 0..81 {
///     if !session.is_given(index) {
///         session.set_cell(index, Some(solution.get(index))).unwrap();
///     }
/// }
/// assert!(session.is_fully_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle: Grid,
    solution: Grid,
    givens: Vec<bool>,
}

impl Session {
    /// Creates a session from a generated puzzle.
    ///
    /// Every non-empty cell of the carved puzzle becomes a given.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            puzzle,
            solution,
            seed: _,
        } = generated;
        let givens = puzzle.cells().iter().map(|&value| value != 0).collect();
        Self {
            puzzle,
            solution,
            givens,
        }
    }

    /// Creates a session from separate puzzle and solution grids.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SizeMismatch`] when the grids differ in size,
    /// [`SessionError::UnsolvedSolution`] when the solution is not a
    /// complete valid solution, and
    /// [`SessionError::PuzzleContradictsSolution`] when a non-empty puzzle
    /// cell disagrees with the solution.
    pub fn from_grids(puzzle: Grid, solution: Grid) -> Result<Self, SessionError> {
        if puzzle.size() != solution.size() {
            return Err(SessionError::SizeMismatch);
        }
        if !solution.is_solved() {
            return Err(SessionError::UnsolvedSolution);
        }
        if let Some(index) = (0..puzzle.size().cell_count())
            .find(|&index| !puzzle.is_cell_empty(index) && puzzle.get(index) != solution.get(index))
        {
            return Err(SessionError::PuzzleContradictsSolution { index });
        }
        let givens = puzzle.cells().iter().map(|&value| value != 0).collect();
        Ok(Self {
            puzzle,
            solution,
            givens,
        })
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.puzzle.size()
    }

    /// Returns the playable grid in its current state.
    #[must_use]
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Returns the retained solution.
    #[must_use]
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns whether the cell at `index` was pre-filled at carving time.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn is_given(&self, index: usize) -> bool {
        self.givens[index]
    }

    /// Writes a player value at `index`; `None` clears the cell.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CannotModifyGivenCell`] for given cells and
    /// [`SessionError::ValueOutOfRange`] for values outside `1..=N`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_cell(&mut self, index: usize, value: Option<u8>) -> Result<(), SessionError> {
        if self.givens[index] {
            return Err(SessionError::CannotModifyGivenCell { index });
        }
        match value {
            Some(value) => {
                let max = self.size().max_value();
                if value == 0 || value > max {
                    return Err(SessionError::ValueOutOfRange { value, max });
                }
                self.puzzle.set(index, value);
            }
            None => self.puzzle.set(index, 0),
        }
        Ok(())
    }

    /// Clears the player value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CannotModifyGivenCell`] for given cells.
    pub fn clear_cell(&mut self, index: usize) -> Result<(), SessionError> {
        self.set_cell(index, None)
    }

    /// Normalizes a raw input string and writes the result at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Input`] when the string does not normalize,
    /// or any error of [`Session::set_cell`].
    pub fn apply_input(&mut self, index: usize, raw: &str) -> Result<(), SessionError> {
        let value = parse_cell_input(raw, self.size())?;
        self.set_cell(index, value)
    }

    /// Returns whether a candidate value matches the solution at `index`.
    #[must_use]
    pub fn cell_is_correct(&self, index: usize, candidate: Option<u8>) -> bool {
        verify::cell_is_correct(&self.solution, index, candidate)
    }

    /// Returns whether the puzzle currently equals the solution cell for
    /// cell.
    #[must_use]
    pub fn is_fully_solved(&self) -> bool {
        verify::is_fully_solved(&self.puzzle, &self.solution)
    }

    /// Returns the carved cells currently holding a wrong non-empty value.
    ///
    /// Given cells are excluded: they are correct by construction and never
    /// flagged.
    #[must_use]
    pub fn incorrect_cells(&self) -> Vec<usize> {
        (0..self.size().cell_count())
            .filter(|&index| {
                !self.givens[index]
                    && !self.puzzle.is_cell_empty(index)
                    && self.puzzle.get(index) != self.solution.get(index)
            })
            .collect()
    }
}
