//! Carving a playable puzzle out of a complete solution.

use rand::{Rng, RngExt as _, seq::SliceRandom as _};
use sudokit_core::{ConfigError, Grid};

/// Default fraction of cells removed from a solution: half the board.
pub const DEFAULT_REMOVAL_FRACTION: f64 = 0.5;

/// Above this fraction rejection sampling re-draws too often, so carving
/// switches to shuffling all indices and blanking a prefix.
const REJECTION_SAMPLING_LIMIT: f64 = 0.8;

/// Removes a fraction of cells from a complete solution to produce a
/// playable puzzle.
///
/// Exactly `⌊N²·f⌋` cells are blanked, chosen uniformly at random; every
/// remaining cell keeps its solution value. The carver does not verify that
/// the resulting puzzle has a unique solution; multiple valid completions
/// may exist.
///
/// # Examples
///
/// ```
/// use sudokit_generator::PuzzleCarver;
///
/// let carver = PuzzleCarver::new(0.5)?;
/// let solution: sudokit_core::Grid = "1234341221434321".parse().unwrap();
/// let puzzle = carver.carve(&solution, &mut rand::rng());
/// assert_eq!(puzzle.empty_count(), 8);
/// # Ok::<(), sudokit_core::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleCarver {
    removal_fraction: f64,
}

impl Default for PuzzleCarver {
    fn default() -> Self {
        Self {
            removal_fraction: DEFAULT_REMOVAL_FRACTION,
        }
    }
}

impl PuzzleCarver {
    /// Creates a carver that blanks the given fraction of cells.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FractionOutOfRange`] unless
    /// `0 < removal_fraction < 1` (this also rejects NaN). A fraction of 1
    /// would make rejection sampling loop forever, and 0 would carve
    /// nothing, so both endpoints are excluded.
    pub fn new(removal_fraction: f64) -> Result<Self, ConfigError> {
        if removal_fraction > 0.0 && removal_fraction < 1.0 {
            Ok(Self { removal_fraction })
        } else {
            Err(ConfigError::FractionOutOfRange {
                fraction: removal_fraction,
            })
        }
    }

    /// Returns the configured removal fraction.
    #[must_use]
    pub fn removal_fraction(&self) -> f64 {
        self.removal_fraction
    }

    /// Carves a puzzle out of `solution`.
    ///
    /// `solution` must be fully populated; carving keeps drawing random
    /// cells until the target count of still-filled ones has been blanked.
    #[must_use]
    pub fn carve<R>(&self, solution: &Grid, rng: &mut R) -> Grid
    where
        R: Rng + ?Sized,
    {
        debug_assert_eq!(solution.empty_count(), 0);
        let cell_count = solution.size().cell_count();
        #[expect(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let target = (cell_count as f64 * self.removal_fraction) as usize;

        let mut puzzle = solution.clone();
        if self.removal_fraction <= REJECTION_SAMPLING_LIMIT {
            let mut removed = 0;
            while removed < target {
                let index = rng.random_range(0..cell_count);
                if !puzzle.is_cell_empty(index) {
                    puzzle.set(index, 0);
                    removed += 1;
                }
            }
        } else {
            let mut indices: Vec<usize> = (0..cell_count).collect();
            indices.shuffle(rng);
            for &index in &indices[..target] {
                puzzle.set(index, 0);
            }
        }
        log::debug!("carved {target} of {cell_count} cells");
        puzzle
    }
}
