//! Transformations
//!
//! Each transformation detects one characteristic of a validated integer and
//! renders it as a (possibly empty) label string. Transformations are pure:
//! they only read the integer, the mapping and the separator.

pub mod digit_sum;
pub mod multipliers;
pub mod occurrences;

pub use digit_sum::DigitSumDivisibility;
pub use multipliers::Multipliers;
pub use occurrences::Occurrences;

use crate::mapping::Mapping;

/// Detects one characteristic of `n` and renders it using `mapping`
pub trait Transformation: std::fmt::Debug {
    /// Short name used in breakdowns and logs
    fn name(&self) -> &'static str;

    /// Render the characteristic of `n`; an empty string means "not detected"
    fn detect(&self, n: u64, mapping: &Mapping, separator: &str) -> String;
}
