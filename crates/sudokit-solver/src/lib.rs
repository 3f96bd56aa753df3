//! Backtracking constraint solver for the Sudokit engine.
//!
//! [`BoardSolver`] fills the empty cells of a [`Grid`](sudokit_core::Grid)
//! into a complete valid solution using backtracking search with per-cell
//! shuffled candidate order. The search is iterative (an explicit frame
//! stack rather than recursion) so a [`SearchBudget`] (a candidate-attempt
//! cap and/or a [`CancelToken`]) can be checked between attempts, bounding
//! worst-case latency for interactive embeddings.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::BoardSize;
//! use sudokit_solver::{BoardSolver, SearchBudget};
//!
//! let solver = BoardSolver::with_budget(SearchBudget::new().with_max_steps(1_000_000));
//! let solution = solver.generate_solution(BoardSize::NINE, &mut rand::rng())?;
//! assert!(solution.is_solved());
//! # Ok::<(), sudokit_solver::SolveError>(())
//! ```

pub mod budget;
pub mod solver;

pub use self::{
    budget::{CancelToken, SearchBudget},
    solver::{BoardSolver, SolveError},
};
