use crate::core::io::stockholm::StockholmFile;
use crate::core::io::traits::AlignmentFile;
use crate::core::models::alignment::Alignment;
use crate::engine::error::EngineError;
use std::path::Path;
use tracing::{debug, instrument};

/// One line per strand pair, in file order.
pub fn report(alignment: &Alignment) -> Vec<String> {
    alignment.display_betas()
}

/// Loads `input` and returns its interleave report.
#[instrument(skip_all, name = "interleave_workflow")]
pub fn run(input: &Path) -> Result<Vec<String>, EngineError> {
    let alignment = StockholmFile::read_from_path(input)?;
    debug!(pairs = alignment.beta_set().len(), "Loaded alignment.");
    Ok(report(&alignment))
}
