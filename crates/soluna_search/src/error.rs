//! Error types for event search.

use soluna_time::TimeError;
use thiserror::Error;

/// Errors from rise/set search.
///
/// Absent events are reported through the result types, not here.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// An event time could not be represented as a calendar instant.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
