//! Core data structures for the Sudokit engine.
//!
//! This crate provides the board representation shared by the solving,
//! generation, and session components:
//!
//! - [`BoardSize`]: validated board dimensions. The side length must be a
//!   perfect square (4, 9, 16, 25, …) so the board divides into boxes.
//! - [`Grid`]: a flat row-major sequence of cell values, `0` meaning empty.
//!   The grid is the sole data structure; rows, columns, and boxes are
//!   derived views.
//! - [`House`]: a row, column, or box view enumerating cell indices.
//! - [`ConfigError`]: invalid configurations, rejected before any work runs.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{BoardSize, Grid};
//!
//! let size = BoardSize::new(4)?;
//! let mut grid = Grid::empty(size);
//!
//! grid.set(size.index_of(0, 0), 3);
//! assert!(grid.conflicts(0, 2, 3)); // same row
//! assert!(grid.conflicts(1, 1, 3)); // same box
//! assert!(!grid.conflicts(2, 2, 3));
//! # Ok::<(), sudokit_core::ConfigError>(())
//! ```

pub mod board_size;
pub mod error;
pub mod grid;
pub mod house;

pub use self::{
    board_size::BoardSize,
    error::ConfigError,
    grid::{Grid, GridError, ParseGridError},
    house::House,
};
