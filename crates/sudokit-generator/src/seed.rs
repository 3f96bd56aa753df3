//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A failure to parse a hex seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a character outside `0-9a-fA-F`.
    #[display("seed contains a non-hex character {ch:?}")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
    },
}

/// A 32-byte seed that makes puzzle generation reproducible.
///
/// A seed displays as (and parses from) 64 lowercase hex characters. It can
/// be drawn from a random source or derived from an arbitrary phrase via
/// SHA-256, and it fully determines both the generated solution and the
/// carved cells.
///
/// # Examples
///
/// ```
/// use sudokit_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily puzzle 2024-01-01");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the given random source.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the deterministic random generator this seed denotes.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0u8; 32];
        for (i, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidHexDigit { ch })?;
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | digit;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_phrase("round trip");
        let hex = seed.to_string();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|ch| ch.is_ascii_hexdigit()));
        assert_eq!(hex.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_known_value() {
        let hex = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
        let seed: PuzzleSeed = hex.parse().unwrap();
        let expected: [u8; 32] = std::array::from_fn(|i| i as u8);
        assert_eq!(seed.as_bytes(), &expected);
        assert_eq!(seed.to_string(), hex);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("g{}", "0".repeat(63));
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidHexDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_from_phrase_is_deterministic() {
        assert_eq!(
            PuzzleSeed::from_phrase("same"),
            PuzzleSeed::from_phrase("same")
        );
        assert_ne!(
            PuzzleSeed::from_phrase("one"),
            PuzzleSeed::from_phrase("two")
        );
    }

    #[test]
    fn test_rng_is_deterministic() {
        let seed = PuzzleSeed::from_phrase("rng");
        let mut a = seed.rng();
        let mut b = seed.rng();
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
