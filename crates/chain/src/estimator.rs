//! Posterior estimation of transition parameters from counts.

use std::sync::OnceLock;

use crate::counts::TransitionCounts;
use crate::error::ChainError;

/// All derived quantities, computed in a single pass over the counts.
#[derive(Debug)]
struct Posterior {
    state_totals: Vec<u64>,
    parameters: Vec<f64>,
    std_dev: Vec<f64>,
}

impl Posterior {
    fn compute(counts: &TransitionCounts) -> Self {
        let n = counts.n_states();
        let raw = counts.as_slice();

        let mut state_totals = vec![0u64; n];
        let mut parameters = vec![0.0; raw.len()];
        let mut std_dev = vec![0.0; raw.len()];

        for origin in 0..n {
            let row = &raw[origin * n..(origin + 1) * n];
            let total: u64 = row.iter().sum();
            state_totals[origin] = total;

            // A zero-total origin keeps an all-zero row; see `ChainEstimator::parameters`.
            if total == 0 {
                continue;
            }

            let denom = total as f64 + n as f64;
            for (dest, &count) in row.iter().enumerate() {
                let p = (count as f64 + 1.0) / denom;
                parameters[origin * n + dest] = p;
                std_dev[origin * n + dest] = (p * (1.0 - p) / (denom + 1.0)).sqrt();
            }
        }

        Self {
            state_totals,
            parameters,
            std_dev,
        }
    }
}

/// Bayesian estimator for the transition parameters of an n-state chain.
///
/// Each origin state carries an independent symmetric Dirichlet(1, …, 1)
/// prior over its n outgoing transition probabilities, so the posterior mean
/// is the Laplace-smoothed frequency `(count + 1) / (total + n)` and the
/// reported uncertainty is the Bernoulli-style marginal approximation
/// `sqrt(p (1 - p) / (total + n + 1))`, the marginal beta variance per
/// transition rather than the full Dirichlet covariance.
///
/// State totals, parameters, and standard deviations are computed together
/// on first access and cached for the lifetime of the estimator. The cache
/// is initialized atomically, so one estimator may be shared across threads;
/// repeated calls return the identical cached slices.
#[derive(Debug)]
pub struct ChainEstimator {
    counts: TransitionCounts,
    posterior: OnceLock<Posterior>,
}

impl ChainEstimator {
    /// Creates an estimator from validated counts.
    pub fn new(counts: TransitionCounts) -> Self {
        Self {
            counts,
            posterior: OnceLock::new(),
        }
    }

    /// Creates an estimator directly from a raw count vector.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] when the vector is empty or its length is not
    /// a perfect square.
    pub fn from_counts(counts: Vec<u64>) -> Result<Self, ChainError> {
        Ok(Self::new(TransitionCounts::new(counts)?))
    }

    /// Returns the underlying counts.
    pub fn counts(&self) -> &TransitionCounts {
        &self.counts
    }

    /// Returns the number of states n.
    pub fn n_states(&self) -> usize {
        self.counts.n_states()
    }

    /// Total observed transitions leaving each state.
    pub fn state_totals(&self) -> &[u64] {
        &self.posterior().state_totals
    }

    /// Posterior-mean transition probabilities, in `origin * n + dest` order.
    ///
    /// For an origin state with a positive total, the n entries of its row
    /// sum to 1. An origin state with no observed outgoing transitions keeps
    /// an all-zero row rather than the uniform 1/n posterior mean; callers
    /// relying on existing numeric expectations depend on this.
    pub fn parameters(&self) -> &[f64] {
        &self.posterior().parameters
    }

    /// Posterior standard deviation of each transition parameter.
    ///
    /// Zero for every transition out of a zero-total origin state.
    pub fn std_dev(&self) -> &[f64] {
        &self.posterior().std_dev
    }

    fn posterior(&self) -> &Posterior {
        self.posterior.get_or_init(|| Posterior::compute(&self.counts))
    }
}
