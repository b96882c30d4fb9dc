//! Composite reports
//!
//! Each report combines several domain operations over the same input into a
//! single result struct, so callers (the demo binary, mostly) can render a
//! full picture without re-running the individual scans.

use crate::constants::MIN_PAIR_LEN;
use crate::domain::collatz::Trajectory;
use crate::domain::difference::{ensure_numeric, max_difference_span};
use crate::domain::digits::{
    DigitFrequency, ParityCounts, count_digits, digit_frequency, digit_product, digit_sum,
    parity_counts,
};
use crate::domain::palindrome::is_palindrome;
use crate::domain::reverse::reverse_number;
use crate::domain::uniqueness::{
    DedupOrder, duplicates, first_duplicate, occurrence_counts, remove_duplicates, singletons,
};
use crate::error::{DrillError, Result};
use std::hash::Hash;
use tracing::debug;

// =============================================================================
// Differences
// =============================================================================

/// Summary of the forward differences in a sequence
#[derive(Clone, Debug, PartialEq)]
pub struct DifferenceAnalysis {
    /// Best forward difference (may be negative)
    pub max_difference: f64,
    /// (min_index, max_index) of the best pair
    pub indices: (usize, usize),
    /// (values[min_index], values[max_index])
    pub pair_values: (f64, f64),
    /// Smallest element
    pub min_element: f64,
    /// Largest element
    pub max_element: f64,
    /// max_element - min_element, ignoring order
    pub overall_range: f64,
    /// Number of values analyzed
    pub length: usize,
}

/// Analyze the differences of `values`
///
/// # Errors
/// * `TooFewElements` when fewer than 2 values are given
/// * `NotANumber` when a value is NaN
pub fn analyze_differences(values: &[f64]) -> Result<DifferenceAnalysis> {
    if values.len() < MIN_PAIR_LEN {
        return Err(DrillError::TooFewElements {
            required: MIN_PAIR_LEN,
            found: values.len(),
        });
    }
    ensure_numeric(values)?;

    let span = max_difference_span(values)?;
    let min_element = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_element = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    debug!(
        len = values.len(),
        difference = span.difference,
        "analyzed differences"
    );

    Ok(DifferenceAnalysis {
        max_difference: span.difference,
        indices: (span.min_index, span.max_index),
        pair_values: (values[span.min_index], values[span.max_index]),
        min_element,
        max_element,
        overall_range: max_element - min_element,
        length: values.len(),
    })
}

// =============================================================================
// Digits
// =============================================================================

/// Digit statistics of a single integer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitReport {
    /// Number the statistics describe
    pub number: i64,
    /// Decimal digits, sign ignored
    pub digit_count: u32,
    /// Sum of the digits
    pub digit_sum: u32,
    /// Product of the digits (0 when any digit is 0)
    pub digit_product: u64,
    /// Even and odd digit counts
    pub parity: ParityCounts,
    /// Count of each digit 0-9
    pub frequency: DigitFrequency,
    /// `None` when the reversal does not fit in an `i64`
    pub reversed: Option<i64>,
    /// Whether the number reads the same reversed
    pub palindrome: bool,
}

/// Collect every digit statistic of `n`
pub fn digit_report(n: i64) -> DigitReport {
    let reversed = reverse_number(n).ok();
    if reversed.is_none() {
        debug!(n, "digit reversal overflows i64");
    }

    DigitReport {
        number: n,
        digit_count: count_digits(n),
        digit_sum: digit_sum(n),
        digit_product: digit_product(n),
        parity: parity_counts(n),
        frequency: digit_frequency(n),
        reversed,
        palindrome: is_palindrome(n),
    }
}

// =============================================================================
// Duplicates
// =============================================================================

/// Uniqueness summary of a sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateReport<T> {
    /// No value occurs twice
    pub all_unique: bool,
    /// Duplicated values in order of first repeat
    pub duplicates: Vec<T>,
    /// Values occurring exactly once, in first-appearance order
    pub singletons: Vec<T>,
    /// Input with repeats removed, first occurrences kept in order
    pub deduplicated: Vec<T>,
    /// First value to repeat in scan order
    pub first_duplicate: Option<T>,
    /// Occurrence count of every distinct value, in first-appearance order
    pub counts: Vec<(T, usize)>,
}

/// Summarize repeats in `items`
pub fn duplicate_report<T: Eq + Hash + Clone>(items: &[T]) -> DuplicateReport<T> {
    let occurrences = occurrence_counts(items);
    let deduplicated = remove_duplicates(items, DedupOrder::Preserve);
    let counts = deduplicated
        .iter()
        .map(|item| (item.clone(), occurrences.get(item).copied().unwrap_or(0)))
        .collect();
    let duplicates = duplicates(items);

    debug!(
        len = items.len(),
        distinct = deduplicated.len(),
        duplicated = duplicates.len(),
        "built duplicate report"
    );

    DuplicateReport {
        all_unique: duplicates.is_empty(),
        duplicates,
        singletons: singletons(items),
        deduplicated,
        first_duplicate: first_duplicate(items),
        counts,
    }
}

// =============================================================================
// Collatz
// =============================================================================

/// Collatz statistics of a single starting number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollatzReport {
    /// Starting value
    pub start: u64,
    /// Steps needed to reach 1
    pub steps: u32,
    /// Largest value visited
    pub peak: u128,
    /// Full trajectory, `start` first and 1 last
    pub trajectory: Vec<u128>,
}

/// Walk the trajectory of `n` once and collect steps, peak and the sequence
///
/// # Errors
/// * `NotPositive` when `n` is 0
/// * `Overflow` when a step exceeds `u64::MAX`
pub fn collatz_report(n: u64) -> Result<CollatzReport> {
    let trajectory = Trajectory::new(n)?.collect::<Result<Vec<u128>>>()?;
    let peak = trajectory.iter().copied().max().unwrap_or(u128::from(n));
    let steps = u32::try_from(trajectory.len() - 1).map_err(|_| DrillError::Overflow)?;

    debug!(n, steps, peak, "built collatz report");

    Ok(CollatzReport {
        start: n,
        steps,
        peak,
        trajectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_differences() {
        let analysis = analyze_differences(&[2.0, 7.0, 1.0, 9.0, 3.0]).unwrap();
        assert_eq!(analysis.max_difference, 8.0);
        assert_eq!(analysis.indices, (2, 3));
        assert_eq!(analysis.pair_values, (1.0, 9.0));
        assert_eq!(analysis.min_element, 1.0);
        assert_eq!(analysis.max_element, 9.0);
        assert_eq!(analysis.overall_range, 8.0);
        assert_eq!(analysis.length, 5);
    }

    #[test]
    fn test_analyze_differences_decreasing() {
        let analysis = analyze_differences(&[30.0, 20.0, 10.0]).unwrap();
        assert_eq!(analysis.max_difference, -10.0);
        assert_eq!(analysis.indices, (0, 1));
        assert_eq!(analysis.overall_range, 20.0);
    }

    #[test]
    fn test_analyze_differences_errors() {
        assert_eq!(
            analyze_differences(&[1.0]),
            Err(DrillError::TooFewElements {
                required: 2,
                found: 1
            })
        );
        assert_eq!(
            analyze_differences(&[1.0, f64::NAN]),
            Err(DrillError::NotANumber { index: 1 })
        );
    }

    #[test]
    fn test_digit_report() {
        let report = digit_report(123450);
        assert_eq!(report.digit_count, 6);
        assert_eq!(report.digit_sum, 15);
        assert_eq!(report.digit_product, 0);
        assert_eq!(report.parity, ParityCounts { even: 3, odd: 3 });
        assert_eq!(report.frequency.get(0), 1);
        assert_eq!(report.frequency.get(9), 0);
        assert_eq!(report.reversed, Some(54321));
        assert!(!report.palindrome);
    }

    #[test]
    fn test_digit_report_reversal_overflow() {
        let report = digit_report(1_999_999_999_999_999_999);
        assert_eq!(report.reversed, None);
        assert_eq!(report.digit_count, 19);
    }

    #[test]
    fn test_duplicate_report() {
        let report = duplicate_report(&[1, 2, 3, 2, 4, 3, 5]);
        assert!(!report.all_unique);
        assert_eq!(report.duplicates, vec![2, 3]);
        assert_eq!(report.singletons, vec![1, 4, 5]);
        assert_eq!(report.deduplicated, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.first_duplicate, Some(2));
        assert_eq!(
            report.counts,
            vec![(1, 1), (2, 2), (3, 2), (4, 1), (5, 1)]
        );
    }

    #[test]
    fn test_duplicate_report_empty() {
        let report = duplicate_report::<i64>(&[]);
        assert!(report.all_unique);
        assert!(report.counts.is_empty());
        assert_eq!(report.first_duplicate, None);
    }

    #[test]
    fn test_collatz_report() {
        let report = collatz_report(6).unwrap();
        assert_eq!(report.steps, 8);
        assert_eq!(report.peak, 16);
        assert_eq!(report.trajectory, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);

        let report = collatz_report(27).unwrap();
        assert_eq!(report.steps, 111);
        assert_eq!(report.peak, 9232);
    }

    #[test]
    fn test_collatz_report_errors() {
        assert_eq!(collatz_report(0), Err(DrillError::NotPositive));
    }

    #[test]
    fn test_collatz_report_path_above_u64() {
        let report = collatz_report(12_327_829_503).unwrap();
        assert_eq!(report.steps, 543);
        assert_eq!(report.peak, 20_722_398_914_405_051_728);
        assert_eq!(report.trajectory.len(), 544);
    }
}
