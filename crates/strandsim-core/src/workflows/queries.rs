use super::augment::is_mutated_name;
use crate::core::io::fasta::write_ungapped;
use crate::core::io::stockholm::StockholmFile;
use crate::core::io::traits::AlignmentFile;
use crate::engine::error::EngineError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Writes the ungapped original rows of `input` as FASTA queries for an external search.
///
/// Simulated replicas are left out. Returns the number of records written.
#[instrument(skip_all, name = "queries_workflow")]
pub fn run(input: &Path, output: &Path) -> Result<usize, EngineError> {
    let alignment = StockholmFile::read_from_path(input)?;

    let mut writer = BufWriter::new(File::create(output)?);
    let written = write_ungapped(
        alignment
            .sequences()
            .iter()
            .filter(|s| !is_mutated_name(&s.name)),
        &mut writer,
    )?;
    writer.flush()?;

    info!(records = written, output = %output.display(), "Wrote search queries.");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_exports_original_rows_without_gaps() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ssi");
        let output = dir.path().join("queries.fasta");
        fs::write(
            &input,
            "# STOCKHOLM 1.0\nseq1     AC-GT\nm_0_seq1     AC-GW\nseq2     .KLM.\n//\n",
        )
        .unwrap();

        let written = run(&input, &output).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            ">seq1\nACGT\n>seq2\nKLM\n"
        );
    }
}
