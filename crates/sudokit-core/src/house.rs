//! Row, column, and box views over a grid.

use std::iter::FusedIterator;

use crate::BoardSize;

/// A Sudoku house (row, column, or `√N×√N` box).
///
/// Houses are derived views: they enumerate flat cell indices, while the cell
/// values stay in the [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (top to bottom).
    Row {
        /// Row index (0-based).
        y: usize,
    },
    /// A column identified by its index (left to right).
    Column {
        /// Column index (0-based).
        x: usize,
    },
    /// A box identified by its index (left to right, top to bottom).
    Box {
        /// Box index (0-based).
        index: usize,
    },
}

impl House {
    /// Returns all rows of a board.
    pub fn rows(size: BoardSize) -> impl Iterator<Item = Self> {
        (0..size.side()).map(|y| Self::Row { y })
    }

    /// Returns all columns of a board.
    pub fn columns(size: BoardSize) -> impl Iterator<Item = Self> {
        (0..size.side()).map(|x| Self::Column { x })
    }

    /// Returns all boxes of a board.
    pub fn boxes(size: BoardSize) -> impl Iterator<Item = Self> {
        (0..size.side()).map(|index| Self::Box { index })
    }

    /// Returns all houses of a board in row, column, box order.
    pub fn all(size: BoardSize) -> impl Iterator<Item = Self> {
        Self::rows(size)
            .chain(Self::columns(size))
            .chain(Self::boxes(size))
    }

    /// Returns an iterator over the flat cell indices belonging to this house.
    ///
    /// The house index must be below `size.side()`.
    #[must_use]
    pub fn cell_indices(self, size: BoardSize) -> HouseCells {
        let house_index = match self {
            House::Row { y } => y,
            House::Column { x } => x,
            House::Box { index } => index,
        };
        debug_assert!(house_index < size.side());
        HouseCells {
            house: self,
            size,
            i: 0,
        }
    }
}

/// Iterator over the cell indices of a [`House`].
#[derive(Debug, Clone)]
pub struct HouseCells {
    house: House,
    size: BoardSize,
    i: usize,
}

impl Iterator for HouseCells {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let side = self.size.side();
        if self.i >= side {
            return None;
        }
        let i = self.i;
        self.i += 1;
        let b = self.size.box_side();
        Some(match self.house {
            House::Row { y } => y * side + i,
            House::Column { x } => i * side + x,
            House::Box { index } => {
                let row = (index / b) * b + i / b;
                let col = (index % b) * b + i % b;
                row * side + col
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.side().saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HouseCells {}
impl FusedIterator for HouseCells {}
