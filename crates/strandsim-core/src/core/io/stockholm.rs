use crate::core::io::traits::AlignmentFile;
use crate::core::models::alignment::Alignment;
use crate::core::models::beta_pair::{BetaPair, BetaPairError};
use crate::core::models::beta_set::BetaSet;
use crate::core::models::sequence::AlignedSequence;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const BETA_TAG: &str = "#=BETA";
const TAIL_MARKER: &str = "//";

#[derive(Debug, Error)]
pub enum StockholmError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: StockholmParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StockholmParseErrorKind {
    #[error("BETA record requires 6 fields, found {found}")]
    MissingBetaFields { found: usize },
    #[error("Invalid integer in BETA field '{field}' (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid strand direction '{0}'. Expected 1 (parallel) or -1 (antiparallel)")]
    InvalidDirection(String),
    #[error(transparent)]
    BetaPair(#[from] BetaPairError),
    #[error("Sequence row '{0}' has no sequence")]
    MissingSequence(String),
}

/// The Stockholm-like alignment format extended with `#=BETA` strand pairing records.
pub struct StockholmFile;

impl StockholmFile {
    /// Parses the fields following the `#=BETA` tag.
    pub fn parse_beta(line: &str) -> Result<BetaPair, StockholmParseErrorKind> {
        let fields: Vec<&str> = line.split_whitespace().skip(1).collect();
        if fields.len() < 6 {
            return Err(StockholmParseErrorKind::MissingBetaFields {
                found: fields.len(),
            });
        }

        let s1 = parse_field(fields[0], "s1")?;
        let s2 = parse_field(fields[1], "s2")?;
        let length = parse_field(fields[2], "length")?;
        let maxgap = fields[3]
            .parse::<i64>()
            .map_err(|_| StockholmParseErrorKind::InvalidInt {
                field: "maxgap",
                value: fields[3].to_string(),
            })?;
        let parallel = match fields[4] {
            "1" => true,
            "-1" => false,
            other => return Err(StockholmParseErrorKind::InvalidDirection(other.to_string())),
        };

        Ok(BetaPair::new(s1, s2, length, maxgap, parallel, fields[5])?)
    }
}

fn parse_field(value: &str, field: &'static str) -> Result<usize, StockholmParseErrorKind> {
    value
        .parse()
        .map_err(|_| StockholmParseErrorKind::InvalidInt {
            field,
            value: value.to_string(),
        })
}

impl AlignmentFile for StockholmFile {
    type Error = StockholmError;

    fn read_from(reader: &mut impl BufRead) -> Result<Alignment, Self::Error> {
        let mut header = Vec::new();
        let mut beta_set = BetaSet::new();
        let mut sequences = Vec::new();
        let mut tail = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.starts_with(BETA_TAG) {
                let pair = Self::parse_beta(line).map_err(|kind| StockholmError::Parse {
                    line: line_num,
                    kind,
                })?;
                beta_set.add(pair);
            } else if line.is_empty() || line.starts_with('#') {
                header.push(line.to_string());
            } else if line == TAIL_MARKER {
                tail = Some(line.to_string());
            } else {
                let mut parts = line.split_whitespace();
                let name = parts.next().unwrap_or_default();
                let sequence = parts.next().ok_or_else(|| StockholmError::Parse {
                    line: line_num,
                    kind: StockholmParseErrorKind::MissingSequence(name.to_string()),
                })?;
                sequences.push(AlignedSequence::new(name, sequence));
            }
        }

        Ok(Alignment::new(header, beta_set, sequences, tail))
    }

    fn write_to(alignment: &Alignment, writer: &mut impl Write) -> Result<(), Self::Error> {
        // Trailing blank header lines collapse into the separator written below.
        let header_end = alignment
            .header
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |i| i + 1);
        for line in &alignment.header[..header_end] {
            writeln!(writer, "{}", line)?;
        }
        for pair in alignment.beta_set().strand_pairs() {
            writeln!(writer, "{}", pair)?;
        }
        writeln!(writer)?;
        for sequence in alignment.all_sequences() {
            writeln!(writer, "{}", sequence)?;
        }
        if let Some(tail) = &alignment.tail {
            writeln!(writer, "{}", tail)?;
        }
        Ok(())
    }
}
