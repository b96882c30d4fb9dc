//! Even filtering and doubling

use crate::error::{DrillError, Result};

/// Keep the even elements of `numbers`, doubled, in input order
///
/// Odd elements are dropped. Doubling that overflows `i64` reports `DrillError::Overflow`.
pub fn double_evens(numbers: &[i64]) -> Result<Vec<i64>> {
    numbers
        .iter()
        .filter(|&&n| n % 2 == 0)
        .map(|&n| n.checked_mul(2).ok_or(DrillError::Overflow))
        .collect()
}
