//! Solution verification predicates.
//!
//! These functions produce booleans only; marking cells or celebrating a
//! finished board is the presentation layer's job.

use sudokit_core::Grid;

/// Returns whether a normalized candidate matches the solution at `index`.
///
/// `None` represents an empty cell and is only correct where the solution
/// itself is empty — which never happens for a generated solution, so an
/// empty player cell always reads as not-yet-correct.
///
/// # Panics
///
/// Panics if `index` is out of range; passing one is a caller bug, not a
/// recoverable condition.
#[must_use]
pub fn cell_is_correct(solution: &Grid, index: usize, candidate: Option<u8>) -> bool {
    let expected = solution.get(index);
    match candidate {
        Some(value) => value == expected,
        None => expected == 0,
    }
}

/// Returns whether `current` equals `solution` cell for cell.
///
/// The comparison is strict over the whole grid, including originally given
/// cells, so a corrupted given also reports `false`.
///
/// # Panics
///
/// Panics if the two grids have different board sizes.
#[must_use]
pub fn is_fully_solved(current: &Grid, solution: &Grid) -> bool {
    assert_eq!(current.size(), solution.size());
    current == solution
}

#[cfg(test)]
mod tests {
    use sudokit_core::{BoardSize, Grid};

    use super::*;

    fn solved_4() -> Grid {
        "1234341221434321".parse().unwrap()
    }

    #[test]
    fn test_cell_is_correct() {
        let solution = solved_4();
        for index in 0..16 {
            let expected = solution.get(index);
            assert!(cell_is_correct(&solution, index, Some(expected)));
            for wrong in (1..=4).filter(|&value| value != expected) {
                assert!(!cell_is_correct(&solution, index, Some(wrong)));
            }
            assert!(!cell_is_correct(&solution, index, None));
        }
    }

    #[test]
    fn test_is_fully_solved() {
        let solution = solved_4();
        assert!(is_fully_solved(&solution, &solution));

        // Flipping any single cell breaks strict equality
        for index in 0..16 {
            let mut copy = solution.clone();
            copy.set(index, solution.get(index) % 4 + 1);
            assert!(!is_fully_solved(&copy, &solution));
        }

        assert!(!is_fully_solved(&Grid::empty(BoardSize::FOUR), &solution));
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn test_size_mismatch_panics() {
        let _ = is_fully_solved(&Grid::empty(BoardSize::FOUR), &Grid::empty(BoardSize::NINE));
    }
}
