use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Number of leading columns a hit line must carry; anything after them is ignored.
const HIT_COLUMNS: usize = 9;

/// One pairwise hit from an external sequence search, in tabular output order
/// `qseqid sseqid qseq sseq pident qstart qend sstart send`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub query_id: String,
    pub subject_id: String,
    pub query_aligned: String,
    pub subject_aligned: String,
    pub percent_identity: f64,
    /// 1-based start of the hit in the ungapped query.
    pub query_start: usize,
    pub query_end: usize,
    pub subject_start: usize,
    pub subject_end: usize,
}

#[derive(Debug, Error)]
pub enum HitsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Hit record {record} has {found} columns, expected at least 9")]
    MissingColumns { record: usize, found: usize },
    #[error("CSV parsing error in hit record {record}: {source}")]
    Csv { record: usize, source: csv::Error },
}

/// Reads comma-separated, header-less search hits.
pub fn read_hits(reader: impl Read) -> Result<Vec<SearchHit>, HitsError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut hits = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record_num = index + 1;
        let record = result.map_err(|e| HitsError::Csv {
            record: record_num,
            source: e,
        })?;
        if record.len() < HIT_COLUMNS {
            return Err(HitsError::MissingColumns {
                record: record_num,
                found: record.len(),
            });
        }
        let leading: csv::StringRecord = record.iter().take(HIT_COLUMNS).collect();
        let hit = leading
            .deserialize::<SearchHit>(None)
            .map_err(|e| HitsError::Csv {
                record: record_num,
                source: e,
            })?;
        hits.push(hit);
    }
    Ok(hits)
}

pub fn read_hits_from_path(path: &Path) -> Result<Vec<SearchHit>, HitsError> {
    let file = std::fs::File::open(path).map_err(|e| HitsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_hits(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_hits_parses_tabular_records() {
        let text = "seq1,gi|123|ref,ACG-T,ACGWT,80.00,3,7,10,15\n\
                    seq2,gi|456|ref,MKV,MRV,66.67,1,3,1,3\n";
        let hits = read_hits(text.as_bytes()).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].query_id, "seq1");
        assert_eq!(hits[0].subject_id, "gi|123|ref");
        assert_eq!(hits[0].query_aligned, "ACG-T");
        assert_eq!(hits[0].subject_aligned, "ACGWT");
        assert!((hits[0].percent_identity - 80.0).abs() < 1e-9);
        assert_eq!(hits[0].query_start, 3);
        assert_eq!(hits[1].subject_end, 3);
    }

    #[test]
    fn read_hits_ignores_trailing_columns() {
        let text = "seq1,s1,AC,AC,90,1,2,1,2,1e-150,300\n";
        let hits = read_hits(text.as_bytes()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].query_end, 2);
    }

    #[test]
    fn read_hits_fails_on_missing_columns() {
        let err = read_hits("seq1,s1,AC,AC,90\n".as_bytes()).unwrap_err();
        assert!(matches!(err, HitsError::MissingColumns { record: 1, found: 5 }));
    }

    #[test]
    fn read_hits_fails_on_non_numeric_identity() {
        let err = read_hits("seq1,s1,AC,AC,high,1,2,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, HitsError::Csv { record: 1, .. }));
    }

    #[test]
    fn read_hits_from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_hits_from_path(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, HitsError::Io { .. }));
    }
}
