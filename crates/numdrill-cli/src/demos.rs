//! Demo blocks, one per topic

use numdrill_core::app::report::{
    analyze_differences, collatz_report, digit_report, duplicate_report,
};
use numdrill_core::{
    all_unique, classify, count_digit, count_digits, double_evens, find_max_steps,
    find_missing_number, find_missing_numbers, is_palindrome, max_difference_span, max_profit,
    next_palindrome, palindromes_in_range, reverse_number, second_largest,
    second_largest_with_index,
};
use std::fmt::Display;

/// A named demo block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Collatz,
    Digits,
    Classify,
    Evens,
    Difference,
    Missing,
    Palindrome,
    Reverse,
    SecondLargest,
    Unique,
}

impl Topic {
    /// Every topic, in the order `all` runs them
    pub const ALL: [Topic; 10] = [
        Topic::Collatz,
        Topic::Digits,
        Topic::Classify,
        Topic::Evens,
        Topic::Difference,
        Topic::Missing,
        Topic::Palindrome,
        Topic::Reverse,
        Topic::SecondLargest,
        Topic::Unique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Collatz => "collatz",
            Topic::Digits => "digits",
            Topic::Classify => "classify",
            Topic::Evens => "evens",
            Topic::Difference => "difference",
            Topic::Missing => "missing",
            Topic::Palindrome => "palindrome",
            Topic::Reverse => "reverse",
            Topic::SecondLargest => "second-largest",
            Topic::Unique => "unique",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Topic::Collatz => "Collatz steps, trajectories and the longest start up to 100",
            Topic::Digits => "Digit counts and digit statistics",
            Topic::Classify => "Zero / even / odd classification",
            Topic::Evens => "Double the even elements of a list",
            Topic::Difference => "Maximum forward difference and stock profit",
            Topic::Missing => "Missing numbers in 1..=n",
            Topic::Palindrome => "Numeric palindromes",
            Topic::Reverse => "Digit reversal",
            Topic::SecondLargest => "Second largest distinct value",
            Topic::Unique => "Uniqueness and duplicate utilities",
        }
    }

    pub fn from_name(name: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|topic| topic.name() == name)
    }

    pub fn run(self) {
        match self {
            Topic::Collatz => collatz(),
            Topic::Digits => digits(),
            Topic::Classify => classify_numbers(),
            Topic::Evens => evens(),
            Topic::Difference => difference(),
            Topic::Missing => missing(),
            Topic::Palindrome => palindrome(),
            Topic::Reverse => reverse(),
            Topic::SecondLargest => second_largest_values(),
            Topic::Unique => unique(),
        }
    }
}

fn heading(title: &str, rule: char, width: usize) {
    println!("{}", title);
    println!("{}", rule.to_string().repeat(width));
}

fn format_list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn format_option<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

fn to_f64(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

fn collatz() {
    heading("Collatz Conjecture - Steps to reach 1:", '=', 50);

    for n in [1u64, 2, 3, 4, 5, 6, 7, 8, 9, 10, 27, 100] {
        match collatz_report(n) {
            Ok(report) => {
                println!("n = {:3}", n);
                println!("  Steps:           {}", report.steps);
                println!("  Peak:            {}", report.peak);
                println!("  Sequence:        {}", format_list(&report.trajectory));
                println!("  Sequence length: {}", report.trajectory.len());
            }
            Err(e) => println!("  Error: {}", e),
        }
        println!();
    }

    println!("Finding number with maximum steps (up to 100):");
    match find_max_steps(100).and_then(|(n, steps)| Ok((collatz_report(n)?, steps))) {
        Ok((report, steps)) => {
            println!("Number {} takes {} steps to reach 1", report.start, steps);
            println!("Sequence: {}", format_list(&report.trajectory));
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn digits() {
    heading("Digit Counts:", '=', 50);

    let numbers = [
        0i64,
        5,
        42,
        123,
        1000,
        12345,
        -123,
        -1000,
        999_999,
        1_000_000,
        10_000_000_000,
        1_000_000_000_000_000,
        123_456_789_012_345,
    ];
    for n in numbers {
        println!("{:20} | {:2} digits", n, count_digits(n));
    }

    println!();
    heading("Digit Statistics:", '=', 50);

    let report = digit_report(123450);
    println!("Number: {}", report.number);
    println!("Total digits: {}", report.digit_count);
    for digit in [0u8, 3] {
        match count_digit(report.number, digit) {
            Ok(count) => println!("Count of digit '{}': {}", digit, count),
            Err(e) => println!("Error: {}", e),
        }
    }
    println!(
        "Even/Odd digits: {} even, {} odd",
        report.parity.even, report.parity.odd
    );
    println!("Sum of digits: {}", report.digit_sum);
    println!("Product of digits: {}", report.digit_product);
    println!("Digit frequency: {}", report.frequency);
    println!("Reversed: {}", format_option(report.reversed));
    println!("Palindrome: {}", report.palindrome);
}

fn classify_numbers() {
    heading("Classification:", '-', 40);

    for n in [0i64, 1, 2, 3, 4, 5, 6, 9, 12, 15, 18, -6, -9, -12] {
        println!("classify({:3}) = '{}'", n, classify(n));
    }
}

fn evens() {
    heading("Doubling even numbers:", '=', 60);

    let cases: [&[i64]; 7] = [
        &[1, 2, 3, 4, 5, 6],
        &[10, 15, 20, 25, 30],
        &[1, 3, 5, 7, 9],
        &[2, 4, 6, 8, 10],
        &[],
        &[0, -2, -3, -4, 7, 8],
        &[100, 101, 102, 103],
    ];
    for (i, numbers) in cases.iter().enumerate() {
        println!("Test {}:", i + 1);
        println!("  Input:  {:?}", numbers);
        match double_evens(numbers) {
            Ok(result) => println!("  Result: {:?}", result),
            Err(e) => println!("  Error: {}", e),
        }
    }
}

fn difference() {
    heading("Maximum Difference:", '=', 80);

    let cases: [&[i64]; 10] = [
        &[7, 1, 5, 3, 6, 4],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[2, 7, 1, 9, 3],
        &[10, 20, 30],
        &[30, 20, 10],
        &[5, 5, 5, 5],
        &[1, 100],
        &[100, 1],
        &[42],
    ];
    for (i, values) in cases.iter().enumerate() {
        println!("Test {}: {:?}", i + 1, values);
        match max_difference_span(&to_f64(values)) {
            Ok(span) => {
                println!("  Max difference: {}", span.difference);
                println!(
                    "  Best pair: arr[{}]={} to arr[{}]={}",
                    span.min_index, values[span.min_index], span.max_index, values[span.max_index]
                );
            }
            Err(e) => println!("  Error: {}", e),
        }
        println!();
    }

    heading("Stock Trading Example:", '-', 30);
    let prices = [7i64, 1, 5, 3, 6, 4];
    println!("Stock prices: {:?}", prices);
    match max_profit(&to_f64(&prices)) {
        Ok(profit) => println!("Maximum profit: ${}", profit),
        Err(e) => println!("Error: {}", e),
    }

    println!();
    heading("Comprehensive Analysis:", '-', 30);
    let data = [2i64, 7, 1, 9, 3];
    println!("Array: {:?}", data);
    match analyze_differences(&to_f64(&data)) {
        Ok(analysis) => {
            println!("  max_difference: {}", analysis.max_difference);
            println!(
                "  max_diff_indices: ({}, {})",
                analysis.indices.0, analysis.indices.1
            );
            println!(
                "  max_diff_values: ({}, {})",
                analysis.pair_values.0, analysis.pair_values.1
            );
            println!("  min_element: {}", analysis.min_element);
            println!("  max_element: {}", analysis.max_element);
            println!("  overall_range: {}", analysis.overall_range);
            println!("  array_length: {}", analysis.length);
        }
        Err(e) => println!("  Error: {}", e),
    }
}

fn missing() {
    heading("Missing Number:", '=', 70);

    let cases: [(&[i64], i64); 7] = [
        (&[1, 2, 4, 5], 3),
        (&[2, 3, 4, 5], 1),
        (&[1, 2, 3, 4], 5),
        (&[1, 3, 4, 5, 6], 2),
        (&[2, 3, 4, 5, 6, 7, 8, 9, 10], 1),
        (&[1, 2, 3, 4, 5, 6, 8, 9, 10], 7),
        (&[1, 2, 2, 4], 3),
    ];
    for (i, (numbers, expected)) in cases.iter().enumerate() {
        println!("Test {}: {:?} (Expected missing: {})", i + 1, numbers, expected);
        match find_missing_number(numbers) {
            Ok(found) => {
                println!("  Found:   {}", found);
                println!("  Correct: {}", found == *expected);
            }
            Err(e) => println!("  Error: {}", e),
        }
        println!();
    }

    println!("Testing multiple missing numbers:");
    let present = [1i64, 3, 5, 7, 9];
    println!("Numbers present: {:?}", present);
    println!("Missing numbers: {:?}", find_missing_numbers(&present, 10));
}

fn palindrome() {
    heading("Palindrome Check:", '=', 80);

    let numbers = [
        121i64, 1221, 12321, 123, 1234, 12345, 0, 5, 9, 10, 100, 1000, -121, -12321, 11, 99,
    ];
    for n in numbers {
        println!("{:6} | {}", n, is_palindrome(n));
    }

    println!();
    println!("Finding palindromes in range 100-200:");
    println!("Palindromes: {:?}", palindromes_in_range(100, 200));

    println!();
    println!("Next palindromes:");
    for n in [100i64, 121, 999, 1991] {
        match next_palindrome(n) {
            Ok(next) => println!("Next palindrome after {}: {}", n, next),
            Err(e) => println!("Next palindrome after {}: Error: {}", n, e),
        }
    }
}

fn reverse() {
    heading("Digit Reversal:", '-', 50);

    for n in [123i64, 4560, 789, -123, -4560, 0, 7, -7, 1000, 10203, i64::MAX] {
        match reverse_number(n) {
            Ok(reversed) => println!("reverse_number({:6}) = {:6}", n, reversed),
            Err(e) => println!("reverse_number({:6}) = Error: {}", n, e),
        }
    }
}

fn second_largest_values() {
    heading("Second Largest:", '=', 60);

    let cases: [&[f64]; 9] = [
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[5.0, 5.0, 4.0, 3.0],
        &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
        &[10.0, 10.0, 10.0],
        &[42.0],
        &[100.0, 50.0, 75.0, 25.0, 90.0],
        &[-5.0, -2.0, -10.0, -1.0],
        &[3.5, 2.5, 1.5, 3.5],
        &[],
    ];
    for (i, values) in cases.iter().enumerate() {
        println!("Test {}: {}", i + 1, format_list(*values));
        match second_largest(values).and_then(|value| {
            second_largest_with_index(values).map(|with_index| (value, with_index))
        }) {
            Ok((value, with_index)) => {
                println!("  Second largest: {}", format_option(value));
                match with_index {
                    Some((value, index)) => println!("  With index:     {} at {}", value, index),
                    None => println!("  With index:     None"),
                }
            }
            Err(e) => println!("  Error: {}", e),
        }
        println!();
    }
}

fn unique() {
    heading("All Unique:", '=', 80);

    let cases: [&[i64]; 6] = [
        &[1, 2, 3, 4, 5],
        &[1, 2, 3, 2, 5],
        &[],
        &[42],
        &[1, 1],
        &[1, 2, 3, 1],
    ];
    for (i, items) in cases.iter().enumerate() {
        println!("Test {}: {:?} -> {}", i + 1, items, all_unique(*items));
    }
    println!("Strings {:?} -> {}", ["a", "b", "c"], all_unique(&["a", "b", "c"]));

    let flags = [true, false];
    let coerced: Vec<i64> = flags
        .iter()
        .map(|&flag| i64::from(flag))
        .chain([1, 0])
        .collect();
    println!(
        "Booleans {:?} coerced with [1, 0]: {:?} -> {}",
        flags,
        coerced,
        all_unique(&coerced)
    );

    println!();
    heading("Duplicate Utilities:", '=', 50);

    let sample = [1i64, 2, 3, 2, 4, 3, 5];
    let report = duplicate_report(&sample);
    let counts: Vec<String> = report
        .counts
        .iter()
        .map(|(value, count)| format!("{}: {}", value, count))
        .collect();

    println!("Sample list: {:?}", sample);
    println!("Is all unique: {}", report.all_unique);
    println!("Duplicates: {:?}", report.duplicates);
    println!("Element counts: {{{}}}", counts.join(", "));
    println!("Unique elements: {:?}", report.singletons);
    println!("Remove duplicates: {:?}", report.deduplicated);
    println!("First duplicate: {}", format_option(report.first_duplicate));
}
