//! Error types for rod-cutting input validation.

use thiserror::Error;

/// Reasons a rod-cutting instance is rejected before solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RodCutError {
    /// The price table does not cover every piece length up to the rod length.
    #[error("rod of length {length} needs {length} prices, got {available}")]
    InsufficientPrices {
        /// Requested rod length.
        length: usize,
        /// Number of entries in the supplied price table.
        available: usize,
    },

    /// The rod is longer than the configured limit.
    #[error("rod length {length} exceeds configured limit {limit}")]
    LengthLimitExceeded {
        /// Requested rod length.
        length: usize,
        /// Configured maximum length.
        limit: usize,
    },

    /// The optimal profit does not fit in `u64`.
    #[error("profit for rod of length {length} overflows u64")]
    ProfitOverflow {
        /// Subproblem length at which the sum overflowed.
        length: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RodCutError>;
