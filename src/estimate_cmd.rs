//! Estimate command: transition-parameter estimation for each count vector.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use spillover_chain::ChainEstimator;

use crate::cli::EstimateArgs;
use crate::input;
use crate::report::{self, ChainReport};

/// Run the estimation pipeline.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();

    let series = input::read_counts(&args.input)?;
    info!(n_vectors = series.len(), "counts loaded");

    let mut reports = Vec::with_capacity(series.len());
    for (index, counts) in series.into_iter().enumerate() {
        let estimator = ChainEstimator::from_counts(counts)
            .with_context(|| format!("invalid count vector at index {index}"))?;
        info!(
            index,
            n_states = estimator.n_states(),
            "chain estimated"
        );
        reports.push(ChainReport::from_estimator(&estimator));
    }

    let json = report::to_json(&reports)?;
    report::write(args.output.as_deref(), &json)
}
