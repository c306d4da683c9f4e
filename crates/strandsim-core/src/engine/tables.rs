use crate::core::models::beta_pair::Exposure;
use crate::core::utils::symbols::{AMINO_ACIDS, amino_acid_index};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const ALPHABET_SIZE: usize = AMINO_ACIDS.len();

/// One row per source residue, one column per target residue, both in alphabet order.
pub type ProbabilityMatrix = [[f64; ALPHABET_SIZE]; ALPHABET_SIZE];

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Table '{path}' has {found} rows, expected 20")]
    RowCount { path: String, found: usize },
    #[error("Table '{path}' row {row} has {found} cells, expected at most 20")]
    TooManyCells {
        path: String,
        row: usize,
        found: usize,
    },
    #[error("Table '{path}' row {row}, column {column}: invalid probability '{value}'")]
    InvalidValue {
        path: String,
        row: usize,
        column: usize,
        value: String,
    },
}

/// Exposure-conditioned substitution probabilities.
///
/// Built once per run and shared by reference with every mutation draw. Rows are expected
/// to be normalized already; blank cells count as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationTables {
    buried: ProbabilityMatrix,
    exposed: ProbabilityMatrix,
}

impl MutationTables {
    pub fn new(buried: ProbabilityMatrix, exposed: ProbabilityMatrix) -> Self {
        Self { buried, exposed }
    }

    pub fn load(exposed_path: &Path, buried_path: &Path) -> Result<Self, TableLoadError> {
        let exposed = Self::load_matrix(exposed_path)?;
        let buried = Self::load_matrix(buried_path)?;
        debug!(
            "Loaded mutation tables (exposed: {:?}, buried: {:?})",
            exposed_path, buried_path
        );
        Ok(Self { buried, exposed })
    }

    fn load_matrix(path: &Path) -> Result<ProbabilityMatrix, TableLoadError> {
        let file = std::fs::File::open(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        parse_matrix(file, &path.to_string_lossy())
    }

    pub fn matrix(&self, exposure: Exposure) -> &ProbabilityMatrix {
        match exposure {
            Exposure::Buried => &self.buried,
            Exposure::Exposed => &self.exposed,
        }
    }

    /// The distribution of replacement residues for `from`, or `None` outside the alphabet.
    pub fn row(&self, exposure: Exposure, from: char) -> Option<&[f64; ALPHABET_SIZE]> {
        amino_acid_index(from).map(|i| &self.matrix(exposure)[i])
    }
}

/// Parses a header-less, comma-separated 20x20 matrix.
///
/// Each physical line is one alphabet row, so an empty line is a row of zeros. Blank lines
/// after the twentieth row are ignored.
pub fn parse_matrix(reader: impl Read, label: &str) -> Result<ProbabilityMatrix, TableLoadError> {
    let mut matrix = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE];
    let mut rows = 0;
    for line in BufReader::new(reader).lines() {
        let line = line.map_err(|e| TableLoadError::Io {
            path: label.to_string(),
            source: e,
        })?;
        let line = line.trim_end_matches('\r');
        if rows >= ALPHABET_SIZE {
            if line.trim().is_empty() {
                continue;
            }
            return Err(TableLoadError::RowCount {
                path: label.to_string(),
                found: rows + 1,
            });
        }

        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() > ALPHABET_SIZE {
            return Err(TableLoadError::TooManyCells {
                path: label.to_string(),
                row: rows + 1,
                found: cells.len(),
            });
        }
        for (column, cell) in cells.iter().enumerate() {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            matrix[rows][column] = cell.parse().map_err(|_| TableLoadError::InvalidValue {
                path: label.to_string(),
                row: rows + 1,
                column: column + 1,
                value: cell.to_string(),
            })?;
        }
        rows += 1;
    }

    if rows != ALPHABET_SIZE {
        return Err(TableLoadError::RowCount {
            path: label.to_string(),
            found: rows,
        });
    }
    Ok(matrix)
}


#[cfg(test)]
mod tests {
    use super::test_support::identity_csv;
    use super::*;
    use std::fs;

    #[test]
    fn parse_matrix_treats_blank_cells_as_zero() {
        let matrix = parse_matrix(identity_csv().as_bytes(), "identity").unwrap();
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[0][1], 0.0);
        assert_eq!(matrix[19][19], 1.0);
        assert_eq!(matrix[19][0], 0.0);
    }

    #[test]
    fn parse_matrix_accepts_short_rows_and_space_cells() {
        let mut lines: Vec<String> = (0..ALPHABET_SIZE).map(|_| "0.5, ,0.5".to_string()).collect();
        lines[3] = "1.0".to_string();
        let matrix = parse_matrix(lines.join("\n").as_bytes(), "short").unwrap();

        assert_eq!(matrix[0][0], 0.5);
        assert_eq!(matrix[0][1], 0.0);
        assert_eq!(matrix[0][2], 0.5);
        assert_eq!(matrix[3][0], 1.0);
        assert_eq!(matrix[3][2], 0.0);
    }

    #[test]
    fn parse_matrix_rejects_wrong_row_count() {
        let text = "1.0\n".repeat(19);
        let err = parse_matrix(text.as_bytes(), "short").unwrap_err();
        assert!(matches!(err, TableLoadError::RowCount { found: 19, .. }));

        let text = "1.0\n".repeat(21);
        let err = parse_matrix(text.as_bytes(), "long").unwrap_err();
        assert!(matches!(err, TableLoadError::RowCount { found: 21, .. }));
    }

    #[test]
    fn parse_matrix_reads_empty_line_as_zero_row() {
        let mut lines: Vec<String> = identity_csv().lines().map(str::to_string).collect();
        lines[1] = String::new();
        let matrix = parse_matrix(lines.join("\n").as_bytes(), "blank-row").unwrap();

        assert_eq!(matrix[1], [0.0; ALPHABET_SIZE]);
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[2][2], 1.0);
        assert_eq!(matrix[19][19], 1.0);
    }

    #[test]
    fn parse_matrix_ignores_trailing_blank_lines() {
        let text = format!("{}\n\n\r\n", identity_csv());
        let matrix = parse_matrix(text.as_bytes(), "trailing").unwrap();
        assert_eq!(matrix[19][19], 1.0);
    }

    #[test]
    fn parse_matrix_rejects_non_numeric_cell() {
        let mut lines: Vec<String> = (0..ALPHABET_SIZE).map(|_| "1.0".to_string()).collect();
        lines[4] = "0.2,abc".to_string();
        let err = parse_matrix(lines.join("\n").as_bytes(), "bad").unwrap_err();
        assert!(matches!(
            err,
            TableLoadError::InvalidValue { row: 5, column: 2, .. }
        ));
    }

    #[test]
    fn parse_matrix_rejects_extra_cells() {
        let mut lines: Vec<String> = (0..ALPHABET_SIZE).map(|_| "1.0".to_string()).collect();
        lines[0] = vec!["0.0"; 21].join(",");
        let err = parse_matrix(lines.join("\n").as_bytes(), "wide").unwrap_err();
        assert!(matches!(err, TableLoadError::TooManyCells { row: 1, found: 21, .. }));
    }

    #[test]
    fn load_reads_both_tables_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let exposed_path = dir.path().join("ExposedProbability.csv");
        let buried_path = dir.path().join("BuriedProbability.csv");
        fs::write(&exposed_path, identity_csv()).unwrap();
        let shifted: String = (0..ALPHABET_SIZE)
            .map(|_| "0.0,1.0".to_string())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&buried_path, shifted).unwrap();

        let tables = MutationTables::load(&exposed_path, &buried_path).unwrap();
        assert_eq!(tables.row(Exposure::Exposed, 'D').unwrap()[2], 1.0);
        assert_eq!(tables.row(Exposure::Buried, 'D').unwrap()[1], 1.0);
        assert!(tables.row(Exposure::Buried, 'B').is_none());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let err = MutationTables::load(&missing, &missing).unwrap_err();
        assert!(matches!(err, TableLoadError::Io { .. }));
    }
}
