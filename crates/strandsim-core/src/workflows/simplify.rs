use crate::core::io::stockholm::StockholmFile;
use crate::core::io::traits::AlignmentFile;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifySummary {
    pub pairs_before: usize,
    pub pairs_after: usize,
}

/// Rewrites `input` to `output` keeping only the strand pairs with `interleave <= threshold`.
#[instrument(skip_all, name = "simplify_workflow", fields(threshold = threshold))]
pub fn run(input: &Path, output: &Path, threshold: usize) -> Result<SimplifySummary, EngineError> {
    let mut alignment = StockholmFile::read_from_path(input)?;
    let pairs_before = alignment.beta_set().len();

    alignment.simplify_betas(threshold);
    let pairs_after = alignment.beta_set().len();
    StockholmFile::write_to_path(&alignment, output)?;

    info!(
        pairs_before,
        pairs_after, "Dropped {} interleaved strand pair(s).", pairs_before - pairs_after
    );
    Ok(SimplifySummary {
        pairs_before,
        pairs_after,
    })
}
