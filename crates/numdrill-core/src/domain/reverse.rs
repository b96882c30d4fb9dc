//! Digit reversal

use crate::constants::RADIX;
use crate::domain::digits::Digits;
use crate::error::{DrillError, Result};

/// Reverse the decimal digits of `n`, keeping its sign
///
/// Trailing zeros of `n` become leading zeros and are dropped
/// (`reverse_number(1000)` is 1).
///
/// # Errors
/// `Overflow` when the reversed value does not fit in `i64`.
pub fn reverse_number(n: i64) -> Result<i64> {
    let reversed = Digits::new(n)
        .try_fold(0u64, |acc, digit| {
            acc.checked_mul(RADIX)?.checked_add(u64::from(digit))
        })
        .ok_or(DrillError::Overflow)?;

    let magnitude = i128::from(reversed);
    let signed = if n < 0 { -magnitude } else { magnitude };
    i64::try_from(signed).map_err(|_| DrillError::Overflow)
}
