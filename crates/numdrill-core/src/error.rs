//! Error type shared by every drill
//!
//! Two kinds of failure exist: invalid arguments (raised immediately, never retried)
//! and arithmetic overflow of the fixed-width integer types. "No result" outcomes
//! such as a missing second-largest value are `Option::None`, not errors.

use thiserror::Error;

/// Drill errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    /// Sequence must contain at least one element
    #[error("List cannot be empty")]
    EmptyInput,
    /// Sequence is shorter than the operation requires
    #[error("List must have at least {required} elements, found {found}")]
    TooFewElements { required: usize, found: usize },
    /// Input must be a positive integer
    #[error("Input must be a positive integer")]
    NotPositive,
    /// Digit parameter is not a decimal digit
    #[error("Digit must be between 0 and 9, got {0}")]
    DigitOutOfRange(u8),
    /// Element is not a number (NaN)
    #[error("List must contain only numeric values (NaN at index {index})")]
    NotANumber { index: usize },
    /// Element lies outside the expected range
    #[error("Value {value} is outside the expected range {lower}..={upper}")]
    OutOfRange { value: i64, lower: i64, upper: i64 },
    /// Element appears more than once where each value must be distinct
    #[error("Value {0} appears more than once")]
    DuplicateValue(i64),
    /// Result does not fit in the integer type
    #[error("Arithmetic overflow")]
    Overflow,
}

impl DrillError {
    /// Check if this error reports an invalid argument (as opposed to overflow)
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Overflow)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_not_invalid_argument() {
        assert!(!DrillError::Overflow.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_kinds() {
        let errors = [
            DrillError::EmptyInput,
            DrillError::TooFewElements {
                required: 2,
                found: 1,
            },
            DrillError::NotPositive,
            DrillError::DigitOutOfRange(10),
            DrillError::NotANumber { index: 3 },
            DrillError::OutOfRange {
                value: 0,
                lower: 1,
                upper: 5,
            },
            DrillError::DuplicateValue(4),
        ];

        for err in errors {
            assert!(err.is_invalid_argument(), "{err} should be invalid-argument");
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(DrillError::EmptyInput.to_string(), "List cannot be empty");
        assert_eq!(
            DrillError::TooFewElements {
                required: 2,
                found: 0
            }
            .to_string(),
            "List must have at least 2 elements, found 0"
        );
        assert_eq!(
            DrillError::DigitOutOfRange(12).to_string(),
            "Digit must be between 0 and 9, got 12"
        );
    }
}
