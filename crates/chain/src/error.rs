//! Error types for the spillover-chain crate.

/// Error type for all fallible operations in the spillover-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when the count vector is empty.
    #[error("count vector is empty")]
    EmptyCounts,

    /// Returned when the count vector's length is not a perfect square.
    #[error("length of counts is not a perfect square: {len}")]
    NotSquare {
        /// Length of the offending vector.
        len: usize,
    },
}
