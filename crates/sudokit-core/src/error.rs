//! Configuration errors shared across the engine.

use derive_more::{Display, Error};

/// An invalid engine configuration.
///
/// Configuration is validated before any search or carving begins, so a
/// rejected configuration never leaves partially-built state behind.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
pub enum ConfigError {
    /// The board side length is zero.
    #[display("board side must be positive")]
    ZeroSide,

    /// The board side length is not a perfect square.
    #[display("board side {side} is not a perfect square")]
    SideNotSquare {
        /// The rejected side length.
        side: usize,
    },

    /// The board side length does not fit in a cell value.
    #[display("board side {side} exceeds the supported maximum of 255")]
    SideTooLarge {
        /// The rejected side length.
        side: usize,
    },

    /// The removal fraction is outside the open interval `(0, 1)`.
    #[display("removal fraction {fraction} is outside (0, 1)")]
    FractionOutOfRange {
        /// The rejected fraction.
        fraction: f64,
    },
}
