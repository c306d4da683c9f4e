use crate::core::models::sequence::AlignedSequence;
use std::io::{self, Write};

const LINE_WIDTH: usize = 60;

/// Writes the ungapped residues of each row as a FASTA record, wrapped at 60 columns.
pub fn write_ungapped<'a>(
    sequences: impl IntoIterator<Item = &'a AlignedSequence>,
    writer: &mut impl Write,
) -> io::Result<usize> {
    let mut written = 0;
    for sequence in sequences {
        writeln!(writer, ">{}", sequence.name)?;
        let residues: Vec<char> = sequence.ungapped().chars().collect();
        for chunk in residues.chunks(LINE_WIDTH) {
            writeln!(writer, "{}", chunk.iter().collect::<String>())?;
        }
        written += 1;
    }
    Ok(written)
}
