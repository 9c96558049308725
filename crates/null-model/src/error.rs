//! Error types for the spillover-null-model crate.

use spillover_chain::ChainError;

/// Error type for all fallible operations in the spillover-null-model crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NullModelError {
    /// Returned when the joint count vector's length is not a power of two.
    #[error("length of counts is not a power of 2: {len}")]
    NotPowerOfTwo {
        /// Length of the offending vector.
        len: usize,
    },

    /// Returned for power-of-two lengths other than 16.
    ///
    /// The marginalization and index-correspondence tables encode the joint
    /// state layout of exactly two 2-state layers; other sizes have no
    /// defined decomposition.
    #[error(
        "unsupported joint chain size: {len} transitions (only two 2-state layers, 16 transitions, are supported)"
    )]
    UnsupportedSize {
        /// Length of the offending vector.
        len: usize,
    },

    /// Returned when the joint counts are rejected by the chain estimator.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_power_of_two() {
        let e = NullModelError::NotPowerOfTwo { len: 3 };
        assert_eq!(e.to_string(), "length of counts is not a power of 2: 3");
    }

    #[test]
    fn error_unsupported_size() {
        let e = NullModelError::UnsupportedSize { len: 4 };
        assert_eq!(
            e.to_string(),
            "unsupported joint chain size: 4 transitions (only two 2-state layers, 16 transitions, are supported)"
        );
    }

    #[test]
    fn error_wraps_chain_error() {
        let e = NullModelError::from(ChainError::EmptyCounts);
        assert_eq!(e.to_string(), "count vector is empty");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<NullModelError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<NullModelError>();
    }
}
