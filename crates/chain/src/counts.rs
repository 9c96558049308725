//! Validated transition-count vectors.

use crate::error::ChainError;

/// Observed transition counts for an n-state Markov chain.
///
/// Entry `origin * n + dest` holds the number of observed transitions from
/// state `origin` to state `dest`, so the vector length must be a perfect
/// square n² with n ≥ 1. The number of states is recovered as the integer
/// square root of the length. Counts are unsigned integers; negative inputs
/// are unrepresentable.
///
/// The vector is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCounts {
    counts: Vec<u64>,
    n_states: usize,
}

impl TransitionCounts {
    /// Validates and wraps a transition-count vector.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptyCounts`] for an empty vector and
    /// [`ChainError::NotSquare`] when the length is not a perfect square.
    pub fn new(counts: Vec<u64>) -> Result<Self, ChainError> {
        if counts.is_empty() {
            return Err(ChainError::EmptyCounts);
        }
        let n_states = counts.len().isqrt();
        if n_states * n_states != counts.len() {
            return Err(ChainError::NotSquare { len: counts.len() });
        }
        Ok(Self { counts, n_states })
    }

    /// Builds the counts of a 2-state chain from its four transition counts.
    ///
    /// A 4-entry vector is always a valid 2-state chain, so this constructor
    /// cannot fail.
    pub fn two_state(counts: [u64; 4]) -> Self {
        Self {
            counts: counts.to_vec(),
            n_states: 2,
        }
    }

    /// Returns the number of states n.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns the number of transitions n².
    pub fn n_transitions(&self) -> usize {
        self.counts.len()
    }

    /// Returns the count for a single transition.
    ///
    /// # Panics
    ///
    /// Panics if `origin` or `dest` is not a valid state index.
    pub fn get(&self, origin: usize, dest: usize) -> u64 {
        assert!(
            origin < self.n_states && dest < self.n_states,
            "state out of range: ({origin}, {dest}) for a {}-state chain",
            self.n_states
        );
        self.counts[origin * self.n_states + dest]
    }

    /// Returns the full count vector in `origin * n + dest` order.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}
