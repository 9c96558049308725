//! Joint-chain analysis with an independence null model.

use std::sync::OnceLock;

use tracing::warn;

use spillover_chain::ChainEstimator;

use crate::correspondence::LAYER_INDEX_FOR_JOINT;
use crate::decompose::{JOINT_TRANSITIONS, NUM_LAYERS, marginal_counts};
use crate::diagnostic::{Diagnostic, GAUSSIAN_APPROX_MIN_TOTAL};
use crate::error::NullModelError;
use crate::model::{NullComponent, NullModel};

/// A 4-state joint Markov chain over the edge states of two 2-state
/// multiplex layers, with an independence null model.
///
/// The joint chain's own transition parameters come from the embedded
/// [`ChainEstimator`]; the null model marginalizes the joint counts into
/// one 2-state chain per layer, estimates each layer independently, and
/// recombines the layer parameters into the joint probabilities that would
/// hold if the layers did not influence each other. Comparing the observed
/// joint parameters against the null probabilities reveals dynamical
/// spillover between the layers.
///
/// The null model is computed on first request and cached for the lifetime
/// of the chain; the cache is initialized atomically, so one chain may be
/// shared across threads.
#[derive(Debug)]
pub struct MultiplexChain {
    joint: ChainEstimator,
    null: OnceLock<NullModel>,
}

impl MultiplexChain {
    /// Validates the joint counts and builds the joint-chain estimator.
    ///
    /// # Errors
    ///
    /// Returns [`NullModelError::NotPowerOfTwo`] when the vector length is
    /// not a power of two, and [`NullModelError::UnsupportedSize`] for any
    /// power-of-two length other than 16: the decomposition tables are
    /// defined only for the joint chain of two 2-state layers.
    pub fn new(counts: Vec<u64>) -> Result<Self, NullModelError> {
        let len = counts.len();
        if !len.is_power_of_two() {
            return Err(NullModelError::NotPowerOfTwo { len });
        }
        if len != JOINT_TRANSITIONS {
            return Err(NullModelError::UnsupportedSize { len });
        }
        let joint = ChainEstimator::from_counts(counts)?;
        Ok(Self {
            joint,
            null: OnceLock::new(),
        })
    }

    /// Returns the estimator for the observed 4-state joint chain.
    pub fn joint(&self) -> &ChainEstimator {
        &self.joint
    }

    /// Returns the independence null model, computing it on first call.
    pub fn null_model(&self) -> &NullModel {
        self.null.get_or_init(|| compute_null_model(&self.joint))
    }

    /// Returns the per-layer null components, computing the model if needed.
    pub fn null_components(&self) -> &[NullComponent; NUM_LAYERS] {
        self.null_model().components()
    }

    /// Probability of each joint transition under layer independence.
    pub fn null_probability(&self) -> &[f64; JOINT_TRANSITIONS] {
        self.null_model().probability()
    }

    /// Propagated standard deviation of each null probability.
    pub fn null_std_dev(&self) -> &[f64; JOINT_TRANSITIONS] {
        self.null_model().std_dev()
    }

    /// Diagnostics raised while computing the null model.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.null_model().diagnostics()
    }
}

fn compute_null_model(joint: &ChainEstimator) -> NullModel {
    let mut joint_counts = [0u64; JOINT_TRANSITIONS];
    joint_counts.copy_from_slice(joint.counts().as_slice());

    let components = marginal_counts(&joint_counts).map(NullComponent::new);

    let mut diagnostics = Vec::new();
    for (layer, component) in components.iter().enumerate() {
        for (state, &total) in component.estimator().state_totals().iter().enumerate() {
            if total < GAUSSIAN_APPROX_MIN_TOTAL {
                warn!(
                    layer,
                    state,
                    total,
                    "state total is less than {GAUSSIAN_APPROX_MIN_TOTAL}: Gaussian \
                     approximation may not be justified"
                );
                diagnostics.push(Diagnostic::LowStateTotal {
                    layer,
                    state,
                    total,
                });
            }
        }
    }

    let (layer1, layer2) = (components[0].estimator(), components[1].estimator());
    let mut probability = [0.0; JOINT_TRANSITIONS];
    let mut std_dev = [0.0; JOINT_TRANSITIONS];

    for (i, &(t1, t2)) in LAYER_INDEX_FOR_JOINT.iter().enumerate() {
        let (p1, p2) = (layer1.parameters()[t1], layer2.parameters()[t2]);
        let (s1, s2) = (layer1.std_dev()[t1], layer2.std_dev()[t2]);

        // Laplace smoothing keeps a layer's parameters strictly positive
        // whenever that state observed any outgoing transitions.
        debug_assert!(p1 > 0.0 || layer1.state_totals()[t1 / 2] == 0);
        debug_assert!(p2 > 0.0 || layer2.state_totals()[t2 / 2] == 0);

        probability[i] = p1 * p2;
        let relative_variance = (s1 / p1).powi(2) + (s2 / p2).powi(2);
        std_dev[i] = probability[i] * relative_variance.sqrt();
    }

    NullModel::new(components, probability, std_dev, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // 1. rejects_non_power_of_two
    #[test]
    fn rejects_non_power_of_two() {
        for len in [3usize, 6, 12, 15, 17] {
            assert!(
                matches!(
                    MultiplexChain::new(vec![1; len]),
                    Err(NullModelError::NotPowerOfTwo { len: l }) if l == len
                ),
                "length {len} must fail the power-of-two check"
            );
        }
    }

    // 2. rejects_other_powers_of_two
    #[test]
    fn rejects_other_powers_of_two() {
        for len in [1usize, 2, 4, 8, 32, 64, 256] {
            assert!(
                matches!(
                    MultiplexChain::new(vec![1; len]),
                    Err(NullModelError::UnsupportedSize { len: l }) if l == len
                ),
                "length {len} must be rejected as unsupported"
            );
        }
    }

    // 3. empty_counts_fail_power_of_two_check
    #[test]
    fn empty_counts_fail_power_of_two_check() {
        assert!(matches!(
            MultiplexChain::new(vec![]),
            Err(NullModelError::NotPowerOfTwo { len: 0 })
        ));
    }

    // 4. joint_estimator_sees_all_counts
    #[test]
    fn joint_estimator_sees_all_counts() {
        let chain = MultiplexChain::new((1..=16).collect()).unwrap();
        assert_eq!(chain.joint().n_states(), 4);
        assert_eq!(chain.joint().state_totals(), &[10, 26, 42, 58]);
    }

    // 5. uniform_counts_give_uniform_null
    //
    // With every joint count equal to 25, each layer has counts [100; 4],
    // so each layer parameter is (100 + 1) / (200 + 2) = 0.5 and every
    // null probability is 0.25 with identical propagated std dev.
    #[test]
    fn uniform_counts_give_uniform_null() {
        let chain = MultiplexChain::new(vec![25; 16]).unwrap();
        let null = chain.null_model();

        for component in null.components() {
            assert_eq!(component.counts(), &[100, 100, 100, 100]);
            assert_eq!(component.estimator().state_totals(), &[200, 200]);
        }
        for i in 0..16 {
            assert_relative_eq!(null.probability()[i], 0.25, epsilon = 1e-12);
            assert_relative_eq!(null.std_dev()[i], 0.024814583349, epsilon = 1e-9);
        }
        assert!(null.diagnostics().is_empty());
    }

    // 6. low_totals_warn_but_complete
    //
    // All-ones counts give each layer state a total of 8, far below the
    // Gaussian floor; the model still computes finite values.
    #[test]
    fn low_totals_warn_but_complete() {
        let chain = MultiplexChain::new(vec![1; 16]).unwrap();
        let null = chain.null_model();

        assert_eq!(null.diagnostics().len(), 4);
        for (layer, state) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(null.diagnostics().contains(&Diagnostic::LowStateTotal {
                layer,
                state,
                total: 8,
            }));
        }

        for i in 0..16 {
            assert_relative_eq!(null.probability()[i], 0.25, epsilon = 1e-12);
            assert_relative_eq!(null.std_dev()[i], 0.106600358178, epsilon = 1e-9);
        }
    }

    // 7. null_model_is_cached
    #[test]
    fn null_model_is_cached() {
        let chain = MultiplexChain::new(vec![25; 16]).unwrap();
        let first = chain.null_model();
        let second = chain.null_model();
        assert!(
            std::ptr::eq(first, second),
            "repeated calls must return the same cached model"
        );
        assert!(std::ptr::eq(
            chain.null_probability(),
            chain.null_probability()
        ));
    }
}
