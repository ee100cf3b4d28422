//! Error types for annealing runs.

use thiserror::Error;

/// Errors raised by operators, phases and schedules.
///
/// All errors are fatal to the call that produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnealError {
    /// Invalid parameters or inputs (temperature, alpha, sizes, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A candidate tour is not a permutation of the seed's ids.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type alias for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealError>;

impl AnnealError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        AnnealError::Configuration(msg.into())
    }
}
