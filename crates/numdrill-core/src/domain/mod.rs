//! Domain layer - Pure computational logic
//!
//! Every function here is a deterministic function of its inputs, with no I/O.

pub mod classify;
pub mod collatz;
pub mod difference;
pub mod digits;
pub mod evens;
pub mod hashing;
pub mod missing;
pub mod palindrome;
pub mod reverse;
pub mod second_largest;
pub mod uniqueness;
