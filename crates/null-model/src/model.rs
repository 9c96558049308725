//! Result types for the independence null model.

use spillover_chain::{ChainEstimator, TransitionCounts};

use crate::decompose::{JOINT_TRANSITIONS, LAYER_TRANSITIONS, NUM_LAYERS};
use crate::diagnostic::Diagnostic;

/// One layer of the null model: the marginal transition counts and the
/// 2-state chain estimator built from them.
#[derive(Debug)]
pub struct NullComponent {
    counts: [u64; LAYER_TRANSITIONS],
    estimator: ChainEstimator,
}

impl NullComponent {
    pub(crate) fn new(counts: [u64; LAYER_TRANSITIONS]) -> Self {
        let estimator = ChainEstimator::new(TransitionCounts::two_state(counts));
        Self { counts, estimator }
    }

    /// Returns the marginal transition counts for this layer.
    pub fn counts(&self) -> &[u64; LAYER_TRANSITIONS] {
        &self.counts
    }

    /// Returns the estimator for this layer's 2-state chain.
    pub fn estimator(&self) -> &ChainEstimator {
        &self.estimator
    }
}

/// The independence null model of a two-layer joint chain.
///
/// Holds the per-layer components, the recombined joint transition
/// probabilities under layer independence, their propagated standard
/// deviations, and any diagnostics raised during computation.
#[derive(Debug)]
pub struct NullModel {
    components: [NullComponent; NUM_LAYERS],
    probability: [f64; JOINT_TRANSITIONS],
    std_dev: [f64; JOINT_TRANSITIONS],
    diagnostics: Vec<Diagnostic>,
}

impl NullModel {
    pub(crate) fn new(
        components: [NullComponent; NUM_LAYERS],
        probability: [f64; JOINT_TRANSITIONS],
        std_dev: [f64; JOINT_TRANSITIONS],
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            components,
            probability,
            std_dev,
            diagnostics,
        }
    }

    /// Returns the per-layer null components.
    pub fn components(&self) -> &[NullComponent; NUM_LAYERS] {
        &self.components
    }

    /// Probability of each joint transition under layer independence:
    /// the product of the two projected layer parameters.
    ///
    /// Grouped into 4-entry blocks by joint origin state, each block sums
    /// to 1 whenever both layers observed transitions out of the
    /// corresponding states.
    pub fn probability(&self) -> &[f64; JOINT_TRANSITIONS] {
        &self.probability
    }

    /// First-order (delta-method) standard deviation of each null
    /// probability, treating the two layer posteriors as independent
    /// Gaussians.
    ///
    /// If a layer state has no observed outgoing transitions its parameters
    /// are zero and the relative-variance propagation is undefined; the
    /// affected entries are NaN, and a
    /// [`Diagnostic::LowStateTotal`](crate::Diagnostic) is always present
    /// in that case.
    pub fn std_dev(&self) -> &[f64; JOINT_TRANSITIONS] {
        &self.std_dev
    }

    /// Non-fatal diagnostics raised while computing the model.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
