//! Error types for the body models.

use thiserror::Error;

/// Errors raised when building model inputs.
///
/// The models themselves never fail; only checked constructors do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
