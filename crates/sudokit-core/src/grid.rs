//! Flat row-major grid storage.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{BoardSize, ConfigError, House};

/// An invalid set of cells for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The number of cells does not match the board size.
    #[display("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        /// Cell count required by the board size.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// A cell value exceeds the board's maximum.
    #[display("cell {index} holds {value}, outside 0..={max}")]
    ValueOutOfRange {
        /// Flat index of the offending cell.
        index: usize,
        /// The rejected value.
        value: u8,
        /// Largest value allowed on this board.
        max: u8,
    },
}

/// A failure to parse a grid string.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A cell token was not a digit, `.`, or `_`.
    #[display("unrecognized cell {cell:?}")]
    BadCell {
        /// The offending token.
        cell: String,
    },
    /// The number of cells is not the square of a valid side length.
    #[display("grid string has {count} cells, which is not a square cell count")]
    BadCellCount {
        /// Number of cells found.
        count: usize,
    },
    /// The implied side length is not a valid board size.
    Size(ConfigError),
    /// The cells do not form a valid grid.
    Grid(GridError),
}

impl From<ConfigError> for ParseGridError {
    fn from(err: ConfigError) -> Self {
        Self::Size(err)
    }
}

impl From<GridError> for ParseGridError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// An `N×N` board stored as a flat row-major sequence of cell values.
///
/// Cell `(row, col)` lives at index `row * N + col`. Values range over
/// `0..=N`, where `0` means empty. Rows, columns, and boxes are derived
/// views ([`House`]), never stored separately.
///
/// # Examples
///
/// ```
/// use sudokit_core::Grid;
///
/// // Boards with side <= 9 parse from compact strings; `.` is an empty cell.
/// let grid: Grid = "12..341221434321".parse()?;
/// assert_eq!(grid.size().side(), 4);
/// assert_eq!(grid.get(0), 1);
/// assert!(grid.is_cell_empty(2));
/// assert_eq!(grid.empty_count(), 2);
/// # Ok::<(), sudokit_core::grid::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cell_count()],
        }
    }

    /// Creates a grid from a flat row-major cell sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCountMismatch`] when the length is not `N²`,
    /// or [`GridError::ValueOutOfRange`] when a value exceeds `N`.
    pub fn from_cells(size: BoardSize, cells: Vec<u8>) -> Result<Self, GridError> {
        if cells.len() != size.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: size.cell_count(),
                actual: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &value)| value > size.max_value())
        {
            return Err(GridError::ValueOutOfRange {
                index,
                value,
                max: size.max_value(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the flat cell slice.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the value at a flat index (`0` means empty).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range; passing one is a caller bug.
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Writes a value at a flat index (`0` clears the cell).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range or the value exceeds `N`.
    pub fn set(&mut self, index: usize, value: u8) {
        assert!(value <= self.size.max_value());
        self.cells[index] = value;
    }

    /// Returns whether the cell at a flat index is empty.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cells[index] == 0
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Returns whether placing `value` at `(row, col)` would collide with
    /// another cell in the same row, column, or box.
    ///
    /// The cell at `(row, col)` itself is ignored, so the check is valid both
    /// for empty cells during search and for re-validating a placed value.
    #[must_use]
    pub fn conflicts(&self, row: usize, col: usize, value: u8) -> bool {
        let side = self.size.side();
        for i in 0..side {
            if i != col && self.cells[row * side + i] == value {
                return true;
            }
            if i != row && self.cells[i * side + col] == value {
                return true;
            }
        }
        let (box_row, box_col) = self.size.box_origin(row, col);
        for r in box_row..box_row + self.size.box_side() {
            for c in box_col..box_col + self.size.box_side() {
                if (r, c) != (row, col) && self.cells[r * side + c] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Returns whether a house contains each value `1..=N` exactly once.
    #[must_use]
    pub fn house_is_complete(&self, house: House) -> bool {
        let mut seen = [false; 256];
        for index in house.cell_indices(self.size) {
            let value = usize::from(self.cells[index]);
            if value == 0 || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }

    /// Returns whether the grid is a complete valid solution: every row,
    /// column, and box is a permutation of `1..=N`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        House::all(self.size).all(|house| self.house_is_complete(house))
    }
}

impl Display for Grid {
    /// Formats the grid as a single line: compact characters for boards with
    /// side ≤ 9, whitespace-separated tokens otherwise. Empty cells are `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.size.side() <= 9;
        for (i, &value) in self.cells.iter().enumerate() {
            if !compact && i > 0 {
                f.write_char(' ')?;
            }
            if value == 0 {
                f.write_char('.')?;
            } else {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses either a compact grid string (one character per cell, side ≤ 9)
    /// or a whitespace-separated token list. `.` and `_` are empty cells.
    /// The board size is inferred from the cell count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut cells = Vec::new();
        if s.split_whitespace().nth(1).is_some() {
            for token in s.split_whitespace() {
                match token {
                    "." | "_" => cells.push(0),
                    _ => cells.push(token.parse().map_err(|_| ParseGridError::BadCell {
                        cell: token.to_owned(),
                    })?),
                }
            }
        } else {
            for ch in s.chars() {
                match ch {
                    '.' | '_' => cells.push(0),
                    '1'..='9' => cells.push(ch as u8 - b'0'),
                    _ => {
                        return Err(ParseGridError::BadCell {
                            cell: ch.to_string(),
                        });
                    }
                }
            }
        }
        let side = cells.len().isqrt();
        if side * side != cells.len() {
            return Err(ParseGridError::BadCellCount { count: cells.len() });
        }
        let size = BoardSize::new(side)?;
        Ok(Self::from_cells(size, cells)?)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // Known-valid 4x4 solution used as a fixture
    const SOLVED_4: [u8; 16] = [1, 2, 3, 4, 3, 4, 1, 2, 2, 1, 4, 3, 4, 3, 2, 1];

    fn solved_4() -> Grid {
        Grid::from_cells(BoardSize::FOUR, SOLVED_4.to_vec()).unwrap()
    }

    #[test]
    fn test_from_cells_validation() {
        assert_eq!(
            Grid::from_cells(BoardSize::FOUR, vec![0; 15]),
            Err(GridError::CellCountMismatch {
                expected: 16,
                actual: 15,
            })
        );
        let mut cells = vec![0; 16];
        cells[7] = 5;
        assert_eq!(
            Grid::from_cells(BoardSize::FOUR, cells),
            Err(GridError::ValueOutOfRange {
                index: 7,
                value: 5,
                max: 4,
            })
        );
    }

    #[test]
    fn test_get_set_and_empty_count() {
        let mut grid = Grid::empty(BoardSize::FOUR);
        assert_eq!(grid.empty_count(), 16);
        grid.set(5, 3);
        assert_eq!(grid.get(5), 3);
        assert!(!grid.is_cell_empty(5));
        assert_eq!(grid.empty_count(), 15);
        grid.set(5, 0);
        assert!(grid.is_cell_empty(5));
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_set_value_out_of_range_panics() {
        let mut grid = Grid::empty(BoardSize::FOUR);
        grid.set(0, 5);
    }

    #[test]
    fn test_conflicts() {
        let mut grid = Grid::empty(BoardSize::NINE);
        grid.set(grid.size().index_of(0, 0), 5);

        // Same row, column, and box collide
        assert!(grid.conflicts(0, 8, 5));
        assert!(grid.conflicts(8, 0, 5));
        assert!(grid.conflicts(2, 2, 5));
        // Unrelated cell does not
        assert!(!grid.conflicts(4, 4, 5));
        // Different value does not
        assert!(!grid.conflicts(0, 8, 6));
        // The occupied cell itself is ignored
        assert!(!grid.conflicts(0, 0, 5));
    }

    #[test]
    fn test_is_solved() {
        let grid = solved_4();
        assert!(grid.is_solved());
        for house in House::all(grid.size()) {
            assert!(grid.house_is_complete(house));
        }

        // Any single altered cell breaks some house
        for index in 0..16 {
            let mut broken = grid.clone();
            let value = broken.get(index);
            broken.set(index, value % 4 + 1);
            assert!(!broken.is_solved(), "flipping cell {index} went unnoticed");
        }

        assert!(!Grid::empty(BoardSize::FOUR).is_solved());
    }

    #[test]
    fn test_display_and_parse_compact() {
        let grid = solved_4();
        assert_eq!(grid.to_string(), "1234341221434321");
        let parsed: Grid = "1234341221434321".parse().unwrap();
        assert_eq!(parsed, grid);

        let partial: Grid = "12..341221434321".parse().unwrap();
        assert_eq!(partial.empty_count(), 2);
        assert_eq!(partial.to_string(), "12..341221434321");
    }

    #[test]
    fn test_parse_tokens() {
        let grid: Grid = "1 2 3 4  3 4 1 2  2 1 4 3  4 3 2 1".parse().unwrap();
        assert_eq!(grid, solved_4());

        let partial: Grid = "1 . 3 4  3 4 1 2  2 1 4 3  4 3 2 _".parse().unwrap();
        assert_eq!(partial.empty_count(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "12x4341221434321".parse::<Grid>(),
            Err(ParseGridError::BadCell {
                cell: "x".to_owned(),
            })
        );
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseGridError::BadCellCount { count: 3 })
        );
        // 9 cells imply a 3x3 board, but 3 is not a perfect square
        assert_eq!(
            "123123123".parse::<Grid>(),
            Err(ParseGridError::Size(ConfigError::SideNotSquare { side: 3 }))
        );
        // Token value above the board maximum
        assert_eq!(
            "1 2 3 4  3 4 1 2  2 1 4 3  4 3 2 9".parse::<Grid>(),
            Err(ParseGridError::Grid(GridError::ValueOutOfRange {
                index: 15,
                value: 9,
                max: 4,
            }))
        );
    }

    fn arb_grid(side: usize) -> impl Strategy<Value = Grid> {
        let size = BoardSize::new(side).unwrap();
        let max = size.max_value();
        proptest::collection::vec(0..=max, size.cell_count())
            .prop_map(move |cells| Grid::from_cells(size, cells).unwrap())
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip_4(grid in arb_grid(4)) {
            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }

        #[test]
        fn prop_display_parse_round_trip_9(grid in arb_grid(9)) {
            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
