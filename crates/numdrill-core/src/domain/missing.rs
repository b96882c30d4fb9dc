//! Missing-number detection
//!
//! `find_missing_number` expects every integer of [1, n] except exactly one,
//! in any order, with n = len + 1. The input is validated in one pass, after
//! which the sum formula n(n+1)/2 - sum identifies the missing value.

use crate::domain::hashing::{HashSet, set_with_capacity};
use crate::error::{DrillError, Result};

/// Find the single value of [1, len + 1] missing from `numbers`
///
/// # Errors
/// * `EmptyInput` when `numbers` is empty
/// * `OutOfRange` when a value lies outside [1, len + 1]
/// * `DuplicateValue` when a value appears twice
pub fn find_missing_number(numbers: &[i64]) -> Result<i64> {
    if numbers.is_empty() {
        return Err(DrillError::EmptyInput);
    }

    let n = numbers.len() + 1;
    let upper = i64::try_from(n).map_err(|_| DrillError::Overflow)?;
    let mut seen = vec![false; n + 1];

    for &value in numbers {
        if !(1..=upper).contains(&value) {
            return Err(DrillError::OutOfRange {
                value,
                lower: 1,
                upper,
            });
        }

        let slot = &mut seen[value as usize];
        if *slot {
            return Err(DrillError::DuplicateValue(value));
        }
        *slot = true;
    }

    // Validation guarantees exactly one value of [1, n] is absent
    let n = n as i128;
    let expected = n * (n + 1) / 2;
    let actual: i128 = numbers.iter().map(|&v| v as i128).sum();
    Ok((expected - actual) as i64)
}

/// Find every value of [1, n] absent from `numbers`, ascending
///
/// Values outside the range are ignored; `n < 1` yields an empty result.
pub fn find_missing_numbers(numbers: &[i64], n: i64) -> Vec<i64> {
    if n < 1 {
        return Vec::new();
    }

    let mut present: HashSet<i64> = set_with_capacity(numbers.len());
    present.extend(numbers.iter().copied().filter(|v| (1..=n).contains(v)));

    (1..=n).filter(|v| !present.contains(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // =========================================================================
    // Reference strategies (valid input assumed)
    // =========================================================================

    fn missing_by_sum(numbers: &[i64]) -> i64 {
        let n = numbers.len() as i64 + 1;
        n * (n + 1) / 2 - numbers.iter().sum::<i64>()
    }

    fn missing_by_xor(numbers: &[i64]) -> i64 {
        let n = numbers.len() as i64 + 1;
        let xor_all = (1..=n).fold(0, |acc, v| acc ^ v);
        let xor_present = numbers.iter().fold(0, |acc, v| acc ^ v);
        xor_all ^ xor_present
    }

    fn missing_by_set_difference(numbers: &[i64]) -> i64 {
        let n = numbers.len() as i64 + 1;
        let present: BTreeSet<i64> = numbers.iter().copied().collect();
        let complete: BTreeSet<i64> = (1..=n).collect();
        *complete.difference(&present).next().expect("one value is missing")
    }

    fn missing_by_binary_search(numbers: &[i64]) -> i64 {
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();

        // First position where sorted[i] != i + 1
        let (mut left, mut right) = (0usize, sorted.len());
        while left < right {
            let mid = (left + right) / 2;
            if sorted[mid] == mid as i64 + 1 {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        left as i64 + 1
    }

    fn missing_by_index_scan(numbers: &[i64]) -> i64 {
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();
        sorted
            .iter()
            .enumerate()
            .find(|&(i, &v)| v != i as i64 + 1)
            .map_or(sorted.len() as i64 + 1, |(i, _)| i as i64 + 1)
    }

    fn assert_all_strategies(numbers: &[i64], expected: i64) {
        assert_eq!(find_missing_number(numbers), Ok(expected), "canonical {:?}", numbers);
        assert_eq!(missing_by_sum(numbers), expected, "sum {:?}", numbers);
        assert_eq!(missing_by_xor(numbers), expected, "xor {:?}", numbers);
        assert_eq!(missing_by_set_difference(numbers), expected, "set {:?}", numbers);
        assert_eq!(missing_by_binary_search(numbers), expected, "binary {:?}", numbers);
        assert_eq!(missing_by_index_scan(numbers), expected, "index {:?}", numbers);
    }

    fn near_complete_sequence() -> impl Strategy<Value = (Vec<i64>, i64)> {
        (2i64..200).prop_flat_map(|n| {
            (1..=n).prop_flat_map(move |missing| {
                let numbers: Vec<i64> = (1..=n).filter(|&v| v != missing).collect();
                (Just(numbers).prop_shuffle(), Just(missing))
            })
        })
    }

    #[test]
    fn test_find_missing_number_examples() {
        assert_all_strategies(&[1, 2, 4, 5], 3);
        assert_all_strategies(&[2, 3, 4, 5], 1);
        assert_all_strategies(&[1, 2, 3, 4], 5);
        assert_all_strategies(&[1, 3, 4, 5, 6], 2);
        assert_all_strategies(&[2, 3, 4, 5, 6, 7, 8, 9, 10], 1);
        assert_all_strategies(&[1, 2, 3, 4, 5, 6, 8, 9, 10], 7);
        assert_all_strategies(&[5, 3, 1, 2], 4);
        assert_all_strategies(&[1], 2);
        assert_all_strategies(&[2], 1);
    }

    #[test]
    fn test_find_missing_number_empty() {
        assert_eq!(find_missing_number(&[]), Err(DrillError::EmptyInput));
    }

    #[test]
    fn test_find_missing_number_out_of_range() {
        assert_eq!(
            find_missing_number(&[1, 2, 9]),
            Err(DrillError::OutOfRange {
                value: 9,
                lower: 1,
                upper: 4
            })
        );
        assert!(matches!(
            find_missing_number(&[0, 1]),
            Err(DrillError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            find_missing_number(&[-3, 1]),
            Err(DrillError::OutOfRange { value: -3, .. })
        ));
    }

    #[test]
    fn test_find_missing_number_duplicate() {
        assert_eq!(
            find_missing_number(&[1, 1, 2]),
            Err(DrillError::DuplicateValue(1))
        );
    }

    #[test]
    fn test_find_missing_numbers() {
        assert_eq!(find_missing_numbers(&[1, 3, 5, 7, 9], 10), vec![2, 4, 6, 8, 10]);
        assert_eq!(find_missing_numbers(&[1, 2, 3], 3), Vec::<i64>::new());
        assert_eq!(find_missing_numbers(&[], 3), vec![1, 2, 3]);
        assert_eq!(find_missing_numbers(&[1, 2, 3], 0), Vec::<i64>::new());
        assert_eq!(find_missing_numbers(&[3, 3, -1, 42, 1], 5), vec![2, 4, 5]);
    }

    proptest! {
        #[test]
        fn prop_strategies_agree((numbers, missing) in near_complete_sequence()) {
            assert_all_strategies(&numbers, missing);
        }

        #[test]
        fn prop_multiple_missing_matches_single((numbers, missing) in near_complete_sequence()) {
            let n = numbers.len() as i64 + 1;
            prop_assert_eq!(find_missing_numbers(&numbers, n), vec![missing]);
        }
    }
}
