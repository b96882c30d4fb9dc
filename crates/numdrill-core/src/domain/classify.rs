//! Integer classification by parity and divisibility by 3

use std::fmt;

/// Classification of an integer
///
/// The four labels are mutually exclusive; negative numbers follow the same rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// n = 0
    Zero,
    /// n ≠ 0, even and divisible by 3
    EvenDivisibleByThree,
    /// n ≠ 0, even and not divisible by 3
    Even,
    /// n odd
    Odd,
}

impl Classification {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "Zero",
            Self::EvenDivisibleByThree => "Even and divisible by 3",
            Self::Even => "Even",
            Self::Odd => "Odd",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an integer
pub fn classify(n: i64) -> Classification {
    match (n, n % 2 == 0, n % 3 == 0) {
        (0, _, _) => Classification::Zero,
        (_, true, true) => Classification::EvenDivisibleByThree,
        (_, true, false) => Classification::Even,
        (_, false, _) => Classification::Odd,
    }
}
