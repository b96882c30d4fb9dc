//! Shared numeric constants
//!
//! Note: classification labels are defined next to `Classification` in domain/classify.rs.

// =============================================================================
// Decimal representation
// =============================================================================

/// Radix used by every digit operation
pub const RADIX: u64 = 10;

/// Number of distinct decimal digits
pub const DIGIT_COUNT: usize = 10;

/// Maximum number of decimal digits of a `u64` (u64::MAX = 18,446,744,073,709,551,615)
pub const MAX_U64_DIGITS: u32 = 20;

/// Powers of ten that fit in a `u64` (10^0 ..= 10^19)
pub const POWERS_OF_TEN: [u64; MAX_U64_DIGITS as usize] = {
    let mut table = [1u64; MAX_U64_DIGITS as usize];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * RADIX;
        i += 1;
    }
    table
};

// =============================================================================
// Sequence requirements
// =============================================================================

/// Minimum length for forward-difference operations (one pair)
pub const MIN_PAIR_LEN: usize = 2;

/// Progress is traced every this many scanned values in range scans
pub const SCAN_TRACE_INTERVAL: u64 = 100_000;
