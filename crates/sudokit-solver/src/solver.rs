//! Backtracking grid completion.

use derive_more::{Display, Error};
use rand::{Rng, seq::SliceRandom as _};
use sudokit_core::{BoardSize, Grid};

use crate::SearchBudget;

/// A failure of the backtracking search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// Every candidate was exhausted at the root of the search.
    ///
    /// Starting from an empty grid a solution always exists, so this is only
    /// reachable when completing a grid whose pre-seeded cells are
    /// contradictory.
    #[display("search exhausted all candidates without finding a solution")]
    NoSolution,

    /// The search exceeded its candidate-attempt cap.
    ///
    /// Recoverable by retrying with a fresh seed, a larger budget, or a
    /// smaller board.
    #[display("search budget of {max_steps} candidate attempts exhausted")]
    BudgetExhausted {
        /// The cap that was hit.
        max_steps: u64,
    },

    /// The search observed a tripped [`CancelToken`](crate::CancelToken).
    #[display("search was cancelled")]
    Cancelled,
}

/// One backtracking frame: the shuffled candidates for an open cell and a
/// cursor into them.
#[derive(Debug)]
struct Frame {
    candidates: Vec<u8>,
    next: usize,
}

/// Backtracking constraint solver that completes grids into full solutions.
///
/// The search walks open cells in row-major order. For each it tries the
/// board's values in an order shuffled by the caller-supplied [`Rng`]; a
/// candidate is accepted when no other cell in the same row, column, or box
/// holds it. When a cell runs out of candidates the previous placement is
/// undone and search resumes there.
///
/// Shuffling makes repeated invocations produce different solutions; seeding
/// the generator (for example `rand_pcg::Pcg64`) makes a run reproducible.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use sudokit_core::BoardSize;
/// use sudokit_solver::BoardSolver;
///
/// let solver = BoardSolver::new();
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
/// let solution = solver.generate_solution(BoardSize::NINE, &mut rng)?;
/// assert!(solution.is_solved());
/// # Ok::<(), sudokit_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardSolver {
    budget: SearchBudget,
}

impl BoardSolver {
    /// Creates a solver with an unlimited search budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver that enforces the given budget.
    #[must_use]
    pub fn with_budget(budget: SearchBudget) -> Self {
        Self { budget }
    }

    /// Generates a complete valid solution for an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BudgetExhausted`] or [`SolveError::Cancelled`]
    /// when the budget trips. [`SolveError::NoSolution`] cannot occur from an
    /// empty grid.
    pub fn generate_solution<R>(&self, size: BoardSize, rng: &mut R) -> Result<Grid, SolveError>
    where
        R: Rng + ?Sized,
    {
        let mut grid = Grid::empty(size);
        self.complete(&mut grid, rng)?;
        Ok(grid)
    }

    /// Fills every empty cell of `grid` in place, producing a complete valid
    /// solution that preserves all pre-seeded (non-zero) cells.
    ///
    /// On error the grid is left partially filled; callers that need the
    /// original should complete a clone.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when the pre-seeded cells admit no
    /// completion, or [`SolveError::BudgetExhausted`] /
    /// [`SolveError::Cancelled`] when the budget trips.
    pub fn complete<R>(&self, grid: &mut Grid, rng: &mut R) -> Result<(), SolveError>
    where
        R: Rng + ?Sized,
    {
        let size = grid.size();
        let open: Vec<usize> = (0..size.cell_count())
            .filter(|&index| grid.is_cell_empty(index))
            .collect();

        let mut stack: Vec<Frame> = Vec::with_capacity(open.len());
        let mut depth = 0;
        let mut steps: u64 = 0;

        while depth < open.len() {
            if stack.len() == depth {
                let mut candidates: Vec<u8> = size.values().collect();
                candidates.shuffle(rng);
                stack.push(Frame {
                    candidates,
                    next: 0,
                });
            }

            let index = open[depth];
            let (row, col) = size.row_col(index);
            let frame = &mut stack[depth];

            let mut placed = false;
            while frame.next < frame.candidates.len() {
                steps += 1;
                self.budget.check(steps)?;
                let value = frame.candidates[frame.next];
                frame.next += 1;
                if !grid.conflicts(row, col, value) {
                    grid.set(index, value);
                    placed = true;
                    break;
                }
            }

            if placed {
                depth += 1;
            } else {
                stack.pop();
                let Some(previous) = depth.checked_sub(1) else {
                    return Err(SolveError::NoSolution);
                };
                depth = previous;
                grid.set(open[depth], 0);
            }
        }

        log::debug!(
            "completed {} open cells on a {size} board in {steps} candidate attempts",
            open.len(),
        );
        Ok(())
    }
}
