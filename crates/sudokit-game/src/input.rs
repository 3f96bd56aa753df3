//! Normalization of raw player input.

use sudokit_core::BoardSize;

/// A rejected raw input string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The input is neither empty nor a decimal number.
    #[display("input {input:?} is not a number")]
    NotANumber {
        /// The trimmed input.
        input: String,
    },
    /// The input is a number outside the board's value range.
    #[display("input {input:?} is outside 1..={max}")]
    OutOfRange {
        /// The trimmed input.
        input: String,
        /// Largest value allowed on this board.
        max: u8,
    },
}

/// Normalizes a raw input string to a cell value.
///
/// Surrounding whitespace is ignored. An empty string means "clear the
/// cell" and normalizes to `None`; anything else must be a decimal number
/// in `1..=N`.
///
/// # Examples
///
/// ```
/// use sudokit_core::BoardSize;
/// use sudokit_game::parse_cell_input;
///
/// assert_eq!(parse_cell_input(" 7 ", BoardSize::NINE), Ok(Some(7)));
/// assert_eq!(parse_cell_input("", BoardSize::NINE), Ok(None));
/// assert!(parse_cell_input("0", BoardSize::NINE).is_err());
/// assert!(parse_cell_input("x", BoardSize::NINE).is_err());
/// ```
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] or [`InputError::OutOfRange`] for
/// inputs that do not normalize.
pub fn parse_cell_input(raw: &str, size: BoardSize) -> Result<Option<u8>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: u32 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_owned(),
    })?;
    if value == 0 || value > u32::from(size.max_value()) {
        return Err(InputError::OutOfRange {
            input: trimmed.to_owned(),
            max: size.max_value(),
        });
    }
    #[expect(clippy::cast_possible_truncation)]
    let value = value as u8;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_clears() {
        assert_eq!(parse_cell_input("", BoardSize::NINE), Ok(None));
        assert_eq!(parse_cell_input("   ", BoardSize::NINE), Ok(None));
    }

    #[test]
    fn test_valid_values() {
        assert_eq!(parse_cell_input("1", BoardSize::NINE), Ok(Some(1)));
        assert_eq!(parse_cell_input(" 9 ", BoardSize::NINE), Ok(Some(9)));
        // Larger boards accept multi-digit values
        let size = sudokit_core::BoardSize::new(16).unwrap();
        assert_eq!(parse_cell_input("16", size), Ok(Some(16)));
    }

    #[test]
    fn test_rejected_values() {
        assert_eq!(
            parse_cell_input("x", BoardSize::NINE),
            Err(InputError::NotANumber {
                input: "x".to_owned(),
            })
        );
        assert_eq!(
            parse_cell_input("0", BoardSize::NINE),
            Err(InputError::OutOfRange {
                input: "0".to_owned(),
                max: 9,
            })
        );
        assert_eq!(
            parse_cell_input("10", BoardSize::NINE),
            Err(InputError::OutOfRange {
                input: "10".to_owned(),
                max: 9,
            })
        );
        // Out-of-range stays out-of-range even past u8
        assert_eq!(
            parse_cell_input("300", BoardSize::NINE),
            Err(InputError::OutOfRange {
                input: "300".to_owned(),
                max: 9,
            })
        );
    }
}
