//! Constants shared across the crate.

/// Number of decimal digits kept by the impurity metrics
/// and the split scores.
pub const ROUND_DIGITS: i32 = 4;
