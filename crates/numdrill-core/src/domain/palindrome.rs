//! Numeric palindromes
//!
//! This module provides the palindrome check, the next-palindrome construction
//! and the range scan built on it. Negative numbers are never palindromes.

use crate::constants::{POWERS_OF_TEN, RADIX};
use crate::error::{DrillError, Result};
use tracing::debug;

/// Check if `n` reads the same forwards and backwards
///
/// Only the lower half of the digits is reversed; the loop stops once the
/// reversed half meets the remaining prefix.
pub fn is_palindrome(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    if n < 10 {
        return true;
    }
    // A trailing zero would need a leading zero
    if n % 10 == 0 {
        return false;
    }

    let mut rest = n;
    let mut reversed_half = 0;
    while rest > reversed_half {
        reversed_half = reversed_half * 10 + rest % 10;
        rest /= 10;
    }

    // Odd digit counts leave the middle digit on reversed_half
    rest == reversed_half || rest == reversed_half / 10
}

/// Build the palindrome of `width` digits whose leading half is `left`
fn mirror(left: u64, width: u32) -> u128 {
    let mut result = left as u128;
    let mut source = if width % 2 == 1 { left / RADIX } else { left };
    for _ in 0..width / 2 {
        result = result * RADIX as u128 + (source % RADIX) as u128;
        source /= RADIX;
    }
    result
}

/// Find the smallest palindrome strictly greater than `n`
///
/// For negative `n` the answer is 0. The result is constructed by mirroring
/// the leading half of `n + 1` (and bumping that half once if the mirror is
/// too small), so the cost does not depend on the gap to the next palindrome.
///
/// # Errors
/// `Overflow` when no palindrome greater than `n` fits in `i64`.
pub fn next_palindrome(n: i64) -> Result<i64> {
    if n < 0 {
        return Ok(0);
    }

    // n + 1 <= 2^63 always fits in u64
    let target = n as u64 + 1;
    let width = target.ilog10() + 1;
    let half_width = width.div_ceil(2);
    let left = target / POWERS_OF_TEN[(width - half_width) as usize];

    let mut candidate = mirror(left, width);
    if candidate < target as u128 {
        // left is never all nines here: that mirror is the largest width-digit value
        candidate = mirror(left + 1, width);
    }

    i64::try_from(candidate).map_err(|_| DrillError::Overflow)
}

/// Collect every palindrome in `[start, end]`, ascending
///
/// Jumps from palindrome to palindrome with `next_palindrome`, so the cost is
/// proportional to the number of palindromes found.
pub fn palindromes_in_range(start: i64, end: i64) -> Vec<i64> {
    let mut found = Vec::new();
    if start > end {
        return found;
    }

    let mut candidate = if is_palindrome(start) {
        Some(start)
    } else {
        next_palindrome(start).ok()
    };

    while let Some(p) = candidate
        && p <= end
    {
        found.push(p);
        candidate = next_palindrome(p).ok();
    }

    debug!(start, end, count = found.len(), "palindrome range scan finished");
    found
}
