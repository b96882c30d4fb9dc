//! Decimal digit operations
//!
//! This module provides the digit iterator and the counting, frequency and
//! arithmetic operations built on it. The sign of the input is always ignored,
//! and 0 is treated as the single digit `0`.

use crate::constants::{DIGIT_COUNT, RADIX};
use crate::error::{DrillError, Result};
use std::fmt;

/// Iterator over the decimal digits of |n|, least significant first
#[derive(Clone, Debug)]
pub struct Digits {
    remaining: u64,
    exhausted: bool,
}

impl Digits {
    /// Create a digit iterator for `n` (sign ignored)
    pub fn new(n: i64) -> Self {
        Self::from_magnitude(n.unsigned_abs())
    }

    /// Create a digit iterator for an unsigned magnitude
    pub fn from_magnitude(magnitude: u64) -> Self {
        Self {
            remaining: magnitude,
            exhausted: false,
        }
    }
}

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.exhausted {
            return None;
        }

        let digit = (self.remaining % RADIX) as u8;
        self.remaining /= RADIX;
        if self.remaining == 0 {
            self.exhausted = true;
        }
        Some(digit)
    }
}

/// Count the decimal digits of `n`
///
/// The sign is ignored and `count_digits(0)` is 1.
#[inline]
pub fn count_digits(n: i64) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

/// Count occurrences of a specific digit (0-9) in `n`
pub fn count_digit(n: i64, digit: u8) -> Result<u32> {
    if digit as usize >= DIGIT_COUNT {
        return Err(DrillError::DigitOutOfRange(digit));
    }
    Ok(Digits::new(n).filter(|&d| d == digit).count() as u32)
}

/// Frequency of each decimal digit in a number
///
/// Every digit 0-9 is present, with a count of 0 when it does not occur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitFrequency([u32; DIGIT_COUNT]);

impl DigitFrequency {
    /// Count for `digit`; 0 for values outside 0-9
    pub fn get(&self, digit: u8) -> u32 {
        self.0.get(digit as usize).copied().unwrap_or(0)
    }

    /// Iterate `(digit, count)` pairs in ascending digit order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.0.iter().enumerate().map(|(d, &c)| (d as u8, c))
    }

    /// Total number of digits counted
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Raw counts indexed by digit
    pub fn as_array(&self) -> &[u32; DIGIT_COUNT] {
        &self.0
    }
}

impl fmt::Display for DigitFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (digit, count) in self.iter() {
            if digit > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", digit, count)?;
        }
        write!(f, "}}")
    }
}

/// Build the full digit-frequency map of `n`
pub fn digit_frequency(n: i64) -> DigitFrequency {
    let mut counts = [0u32; DIGIT_COUNT];
    for digit in Digits::new(n) {
        counts[digit as usize] += 1;
    }
    DigitFrequency(counts)
}

/// Even and odd digit counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParityCounts {
    /// Digits 0, 2, 4, 6, 8
    pub even: u32,
    /// Digits 1, 3, 5, 7, 9
    pub odd: u32,
}

/// Count even and odd digits of `n` (0 counts as one even digit)
pub fn parity_counts(n: i64) -> ParityCounts {
    Digits::new(n).fold(ParityCounts::default(), |mut acc, digit| {
        if digit % 2 == 0 {
            acc.even += 1;
        } else {
            acc.odd += 1;
        }
        acc
    })
}

/// Sum of the digits of `n`
pub fn digit_sum(n: i64) -> u32 {
    Digits::new(n).map(u32::from).sum()
}

/// Product of the digits of `n`
///
/// Any zero digit makes the product 0, so `digit_product(0)` is 0.
/// The largest possible product (9^19) fits in a `u64`.
pub fn digit_product(n: i64) -> u64 {
    Digits::new(n).map(u64::from).product()
}
