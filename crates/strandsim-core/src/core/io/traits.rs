use crate::core::models::alignment::Alignment;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing alignment file formats.
///
/// Implementors handle format-specific parsing and serialization; the path-based helpers
/// wrap them with buffered file handles.
pub trait AlignmentFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads an alignment from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Alignment, Self::Error>;

    /// Writes an alignment to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(alignment: &Alignment, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads an alignment from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Alignment, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes an alignment to a file path, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(alignment: &Alignment, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(alignment, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
