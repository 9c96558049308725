//! Analyze command: independence null model and spillover comparison.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use spillover_null_model::MultiplexChain;

use crate::cli::AnalyzeArgs;
use crate::input;
use crate::report::{self, SpilloverReport};

/// Run the null-model analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    let series = input::read_counts(&args.input)?;
    info!(n_vectors = series.len(), "counts loaded");

    let mut reports = Vec::with_capacity(series.len());
    for (index, counts) in series.into_iter().enumerate() {
        let chain = MultiplexChain::new(counts)
            .with_context(|| format!("invalid joint count vector at index {index}"))?;
        let spillover = SpilloverReport::from_chain(&chain);
        info!(
            index,
            n_warnings = spillover.warnings.len(),
            "null model computed"
        );
        reports.push(spillover);
    }

    let json = report::to_json(&reports)?;
    report::write(args.output.as_deref(), &json)
}
