//! Error types for time normalization.

use thiserror::Error;

/// Errors from converting between Julian dates and calendar instants.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Julian date is NaN or infinite.
    #[error("Julian date is not finite: {0}")]
    NonFinite(f64),
    /// Julian date maps outside the representable calendar range.
    #[error("Julian date {0} is outside the representable calendar range")]
    OutOfRange(f64),
    /// Adding an offset overflowed the calendar range.
    #[error("adding {0} hours overflows the calendar range")]
    Overflow(f64),
}
