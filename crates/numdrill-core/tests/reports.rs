use numdrill_core::app::report::{
    analyze_differences, collatz_report, digit_report, duplicate_report,
};
use numdrill_core::{DrillError, collatz_peak, collatz_steps, is_palindrome, reverse_number};

#[test]
fn test_collatz_report_agrees_with_single_operations() {
    for n in 1..=2_000u64 {
        let report = collatz_report(n).unwrap();
        assert_eq!(Ok(report.steps), collatz_steps(n));
        assert_eq!(Ok(report.peak), collatz_peak(n));
        assert_eq!(report.trajectory.len(), report.steps as usize + 1);
    }
}

#[test]
fn test_collatz_report_beyond_u64_peak() {
    let report = collatz_report(12_327_829_503).unwrap();
    assert_eq!(Ok(report.steps), collatz_steps(12_327_829_503));
    assert!(report.peak > u128::from(u64::MAX));
    assert_eq!(report.trajectory.iter().max(), Some(&report.peak));
}

#[test]
fn test_digit_report_agrees_with_single_operations() {
    for n in [-12321i64, -4560, 0, 7, 1221, 123450, i64::MIN, i64::MAX] {
        let report = digit_report(n);
        assert_eq!(report.reversed, reverse_number(n).ok());
        assert_eq!(report.palindrome, is_palindrome(n));
        assert_eq!(report.frequency.total(), report.digit_count);
        assert_eq!(report.frequency.as_array().iter().sum::<u32>(), report.digit_count);
        assert_eq!(report.parity.even + report.parity.odd, report.digit_count);
    }
}

#[test]
fn test_duplicate_report_on_strings() {
    let words = ["b", "a", "b", "c", "a", "b"];
    let report = duplicate_report(&words);

    assert!(!report.all_unique);
    assert_eq!(report.duplicates, vec!["b", "a"]);
    assert_eq!(report.singletons, vec!["c"]);
    assert_eq!(report.deduplicated, vec!["b", "a", "c"]);
    assert_eq!(report.first_duplicate, Some("b"));
    assert_eq!(report.counts, vec![("b", 3), ("a", 2), ("c", 1)]);
}

#[test]
fn test_analyze_differences_stock_prices() {
    let analysis = analyze_differences(&[7.0, 1.0, 5.0, 3.0, 6.0, 4.0]).unwrap();
    assert_eq!(analysis.max_difference, 5.0);
    assert_eq!(analysis.indices, (1, 4));
    assert_eq!(analysis.pair_values, (1.0, 6.0));
    assert_eq!(analysis.overall_range, 6.0);

    assert_eq!(analyze_differences(&[]), Err(DrillError::TooFewElements { required: 2, found: 0 }));
}
