//! Validated board dimensions.

use std::fmt::{self, Display};

use crate::ConfigError;

/// The dimensions of a Sudoku board.
///
/// A board side length must be a perfect square so that the board divides
/// into `√N × √N` boxes; `N ∈ {4, 9, 16, 25, …}`. The invariant is checked
/// once at construction, so every other component may assume it.
///
/// Cell values are stored as `u8`, which caps the side length at 255 (225 is
/// the largest perfect square below that).
///
/// # Examples
///
/// ```
/// use sudokit_core::BoardSize;
///
/// let size = BoardSize::new(9)?;
/// assert_eq!(size.side(), 9);
/// assert_eq!(size.box_side(), 3);
/// assert_eq!(size.cell_count(), 81);
///
/// // 10 is not a perfect square
/// assert!(BoardSize::new(10).is_err());
/// # Ok::<(), sudokit_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    side: u8,
    box_side: u8,
}

impl BoardSize {
    /// The 4×4 board (2×2 boxes).
    pub const FOUR: Self = Self { side: 4, box_side: 2 };

    /// The standard 9×9 board (3×3 boxes).
    pub const NINE: Self = Self { side: 9, box_side: 3 };

    /// Creates a board size from a side length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSide`] for a zero side,
    /// [`ConfigError::SideNotSquare`] when the side is not a perfect square,
    /// and [`ConfigError::SideTooLarge`] when it exceeds 255.
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        if side == 0 {
            return Err(ConfigError::ZeroSide);
        }
        if side > usize::from(u8::MAX) {
            return Err(ConfigError::SideTooLarge { side });
        }
        let box_side = side.isqrt();
        if box_side * box_side != side {
            return Err(ConfigError::SideNotSquare { side });
        }
        #[expect(clippy::cast_possible_truncation)]
        let (side, box_side) = (side as u8, box_side as u8);
        Ok(Self { side, box_side })
    }

    /// Returns the side length `N`.
    #[must_use]
    pub const fn side(self) -> usize {
        self.side as usize
    }

    /// Returns the box side length `√N`.
    #[must_use]
    pub const fn box_side(self) -> usize {
        self.box_side as usize
    }

    /// Returns the total number of cells, `N²`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Returns the largest cell value, `N`.
    #[must_use]
    pub const fn max_value(self) -> u8 {
        self.side
    }

    /// Returns an iterator over all cell values `1..=N`.
    pub fn values(self) -> impl Iterator<Item = u8> {
        1..=self.side
    }

    /// Converts `(row, col)` coordinates into a flat row-major index.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub fn index_of(self, row: usize, col: usize) -> usize {
        assert!(row < self.side() && col < self.side());
        row * self.side() + col
    }

    /// Converts a flat index back into `(row, col)` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn row_col(self, index: usize) -> (usize, usize) {
        assert!(index < self.cell_count());
        (index / self.side(), index % self.side())
    }

    /// Returns the top-left `(row, col)` of the box containing `(row, col)`.
    #[must_use]
    pub fn box_origin(self, row: usize, col: usize) -> (usize, usize) {
        let b = self.box_side();
        ((row / b) * b, (col / b) * b)
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sides() {
        for side in [1, 4, 9, 16, 25, 225] {
            let size = BoardSize::new(side).unwrap();
            assert_eq!(size.side(), side);
            assert_eq!(size.box_side() * size.box_side(), side);
            assert_eq!(size.cell_count(), side * side);
        }
        assert_eq!(BoardSize::FOUR, BoardSize::new(4).unwrap());
        assert_eq!(BoardSize::NINE, BoardSize::new(9).unwrap());
    }

    #[test]
    fn test_invalid_sides() {
        assert_eq!(BoardSize::new(0), Err(ConfigError::ZeroSide));
        assert_eq!(
            BoardSize::new(10),
            Err(ConfigError::SideNotSquare { side: 10 })
        );
        assert_eq!(
            BoardSize::new(15),
            Err(ConfigError::SideNotSquare { side: 15 })
        );
        assert_eq!(
            BoardSize::new(256),
            Err(ConfigError::SideTooLarge { side: 256 })
        );
    }

    #[test]
    fn test_index_math() {
        let size = BoardSize::NINE;
        assert_eq!(size.index_of(0, 0), 0);
        assert_eq!(size.index_of(1, 0), 9);
        assert_eq!(size.index_of(8, 8), 80);
        assert_eq!(size.row_col(9), (1, 0));
        assert_eq!(size.row_col(80), (8, 8));

        assert_eq!(size.box_origin(0, 0), (0, 0));
        assert_eq!(size.box_origin(4, 7), (3, 6));
        assert_eq!(size.box_origin(8, 8), (6, 6));

        let size = BoardSize::FOUR;
        assert_eq!(size.box_origin(1, 2), (0, 2));
        assert_eq!(size.box_origin(3, 1), (2, 0));
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_index_of_out_of_range_panics() {
        let _ = BoardSize::FOUR.index_of(4, 0);
    }

    #[test]
    fn test_values_and_display() {
        let values: Vec<u8> = BoardSize::FOUR.values().collect();
        assert_eq!(values, [1, 2, 3, 4]);
        assert_eq!(BoardSize::NINE.to_string(), "9x9");
    }
}
