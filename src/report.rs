//! JSON report structures for the spillover CLI.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use spillover_chain::ChainEstimator;
use spillover_null_model::MultiplexChain;

/// Estimation summary for a single chain.
#[derive(Debug, Serialize)]
pub struct ChainReport {
    pub n_states: usize,
    pub counts: Vec<u64>,
    pub state_totals: Vec<u64>,
    pub parameters: Vec<f64>,
    pub std_dev: Vec<f64>,
}

impl ChainReport {
    pub fn from_estimator(estimator: &ChainEstimator) -> Self {
        Self {
            n_states: estimator.n_states(),
            counts: estimator.counts().as_slice().to_vec(),
            state_totals: estimator.state_totals().to_vec(),
            parameters: estimator.parameters().to_vec(),
            std_dev: estimator.std_dev().to_vec(),
        }
    }
}

/// Observed-vs-null comparison for one joint transition.
#[derive(Debug, Serialize)]
pub struct TransitionComparison {
    pub joint_index: usize,
    pub observed: f64,
    pub observed_std_dev: f64,
    pub null: f64,
    pub null_std_dev: f64,
    pub difference: f64,
    /// Difference in combined standard deviations, the spillover signal.
    /// Absent when the combined uncertainty is zero or non-finite.
    pub z_score: Option<f64>,
}

/// Full null-model analysis of one joint count vector.
#[derive(Debug, Serialize)]
pub struct SpilloverReport {
    pub joint: ChainReport,
    pub layers: Vec<ChainReport>,
    pub null_probability: Vec<f64>,
    pub null_std_dev: Vec<f64>,
    pub comparisons: Vec<TransitionComparison>,
    pub warnings: Vec<String>,
}

impl SpilloverReport {
    pub fn from_chain(chain: &MultiplexChain) -> Self {
        let null = chain.null_model();
        let joint = ChainReport::from_estimator(chain.joint());

        let comparisons = (0..joint.parameters.len())
            .map(|i| {
                let observed = joint.parameters[i];
                let observed_std_dev = joint.std_dev[i];
                let null_p = null.probability()[i];
                let null_s = null.std_dev()[i];
                let combined = (observed_std_dev.powi(2) + null_s.powi(2)).sqrt();
                let z = (observed - null_p) / combined;
                TransitionComparison {
                    joint_index: i,
                    observed,
                    observed_std_dev,
                    null: null_p,
                    null_std_dev: null_s,
                    difference: observed - null_p,
                    z_score: z.is_finite().then_some(z),
                }
            })
            .collect();

        Self {
            joint,
            layers: null
                .components()
                .iter()
                .map(|c| ChainReport::from_estimator(c.estimator()))
                .collect(),
            null_probability: null.probability().to_vec(),
            null_std_dev: null.std_dev().to_vec(),
            comparisons,
            warnings: null.diagnostics().iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Serialize a report series to a pretty JSON string.
pub fn to_json<T: Serialize>(reports: &[T]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("failed to serialize report")
}

/// Write the report to the given path, or to stdout when no path is set.
pub fn write(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chain_report_mirrors_estimator() {
        let estimator = ChainEstimator::from_counts(vec![10, 10, 20, 20]).unwrap();
        let report = ChainReport::from_estimator(&estimator);

        assert_eq!(report.n_states, 2);
        assert_eq!(report.counts, vec![10, 10, 20, 20]);
        assert_eq!(report.state_totals, vec![20, 40]);
        assert_eq!(report.parameters, estimator.parameters());
    }

    #[test]
    fn spillover_report_shapes() {
        let chain = MultiplexChain::new(vec![25; 16]).unwrap();
        let report = SpilloverReport::from_chain(&chain);

        assert_eq!(report.joint.n_states, 4);
        assert_eq!(report.layers.len(), 2);
        assert_eq!(report.null_probability.len(), 16);
        assert_eq!(report.null_std_dev.len(), 16);
        assert_eq!(report.comparisons.len(), 16);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn comparison_difference_and_z_score() {
        let chain = MultiplexChain::new(vec![25; 16]).unwrap();
        let report = SpilloverReport::from_chain(&chain);

        for comparison in &report.comparisons {
            assert_relative_eq!(
                comparison.difference,
                comparison.observed - comparison.null,
                epsilon = 1e-12
            );
            let z = comparison.z_score.expect("uncertainties are positive here");
            let combined =
                (comparison.observed_std_dev.powi(2) + comparison.null_std_dev.powi(2)).sqrt();
            assert_relative_eq!(z * combined, comparison.difference, epsilon = 1e-12);
        }
    }

    #[test]
    fn warnings_carry_diagnostic_text() {
        let chain = MultiplexChain::new(vec![1; 16]).unwrap();
        let report = SpilloverReport::from_chain(&chain);

        assert_eq!(report.warnings.len(), 4);
        for warning in &report.warnings {
            assert!(warning.contains("Gaussian approximation may not be justified"));
        }
    }

    #[test]
    fn reports_serialize_to_json() {
        let chain = MultiplexChain::new(vec![25; 16]).unwrap();
        let json = to_json(&[SpilloverReport::from_chain(&chain)]).unwrap();

        assert!(json.contains("\"null_probability\""));
        assert!(json.contains("\"comparisons\""));
        assert!(json.contains("\"z_score\""));
        assert!(json.contains("\"warnings\""));
    }
}
