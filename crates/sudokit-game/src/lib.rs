//! Puzzle session management and solution checking for the Sudokit engine.
//!
//! This crate is the engine's surface for a presentation layer:
//!
//! - [`Session`] owns a puzzle, its retained solution, and the set of given
//!   cells, guarding the invariant that givens are never modified.
//! - [`verify`] holds the pure verification predicates
//!   ([`verify::cell_is_correct`], [`verify::is_fully_solved`]); they return
//!   booleans only, leaving highlighting and celebration to the caller.
//! - [`parse_cell_input`] normalizes raw input strings to cell values.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::BoardSize;
//! use sudokit_game::Session;
//! use sudokit_generator::PuzzleGenerator;
//!
//! let generated = PuzzleGenerator::new().generate(BoardSize::FOUR).unwrap();
//! let mut session = Session::new(generated);
//!
//! let carved = (0..16).find(|&index| !session.is_given(index)).unwrap();
//! session.apply_input(carved, "3").unwrap();
//! if !session.cell_is_correct(carved, Some(3)) {
//!     assert_eq!(session.incorrect_cells(), vec![carved]);
//! }
//! ```

pub mod input;
pub mod session;
pub mod verify;

pub use self::{
    input::{InputError, parse_cell_input},
    session::{Session, SessionError},
};
