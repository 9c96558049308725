//! Non-fatal diagnostics attached to null-model results.

use std::fmt;

/// Smallest layer state total for which the Gaussian approximation behind
/// the null std-dev propagation is considered justified.
pub const GAUSSIAN_APPROX_MIN_TOTAL: u64 = 100;

/// A non-fatal condition observed while computing the null model.
///
/// Diagnostics are carried on the result so callers can inspect them
/// programmatically; computation always proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A marginal layer state has fewer outgoing transitions than
    /// [`GAUSSIAN_APPROX_MIN_TOTAL`], so the delta-method standard
    /// deviation for transitions out of that state may be unreliable.
    LowStateTotal {
        /// Zero-based layer index (0 or 1).
        layer: usize,
        /// State of that layer's 2-state chain (0 or 1).
        state: usize,
        /// Total outgoing transitions observed for the state.
        total: u64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowStateTotal {
                layer,
                state,
                total,
            } => write!(
                f,
                "layer {layer} state {state} total is {total}, less than \
                 {GAUSSIAN_APPROX_MIN_TOTAL}: Gaussian approximation may not be justified"
            ),
        }
    }
}
