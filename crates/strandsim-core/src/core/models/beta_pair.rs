use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Solvent exposure of a strand residue, used to pick a mutation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Exposure {
    Buried,
    Exposed,
}

impl Exposure {
    /// Conformation code `i` marks a buried residue; every other code is exposed.
    pub fn from_code(code: char) -> Self {
        if code == 'i' {
            Exposure::Buried
        } else {
            Exposure::Exposed
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid exposure '{0}'. Expected 'buried' or 'exposed'")]
pub struct ParseExposureError(pub String);

impl FromStr for Exposure {
    type Err = ParseExposureError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buried" => Ok(Exposure::Buried),
            "exposed" => Ok(Exposure::Exposed),
            _ => Err(ParseExposureError(s.to_string())),
        }
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Exposure::Buried => "buried",
                Exposure::Exposed => "exposed",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetaPairError {
    #[error("Illegal conformation '{conformation}' for length {length}")]
    ConformationLength { conformation: String, length: usize },
    #[error("Strand starting at {start} with length {length} runs past the largest column")]
    SpanOverflow { start: usize, length: usize },
}

/// One structurally paired pair of strand segments.
///
/// Columns `s1..s1+length` pair with `s2..s2+length`, front to front when the strands are
/// parallel and front to back when they are antiparallel. Positions, exposures and the
/// residue pairing are derived once at construction; only `interleave` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetaPair {
    pub s1: usize,
    pub s2: usize,
    pub length: usize,
    pub maxgap: i64, // Carried through unchanged for round-tripping
    pub parallel: bool,
    pub conformation: String,
    pub interleave: usize,
    positions: BTreeSet<usize>,
    exposures: BTreeMap<usize, Exposure>,
    residue_pairs: BTreeMap<usize, usize>,
}

impl BetaPair {
    pub fn new(
        s1: usize,
        s2: usize,
        length: usize,
        maxgap: i64,
        parallel: bool,
        conformation: &str,
    ) -> Result<Self, BetaPairError> {
        let codes: Vec<char> = conformation.chars().collect();
        if codes.len() != length {
            return Err(BetaPairError::ConformationLength {
                conformation: conformation.to_string(),
                length,
            });
        }

        for start in [s1, s2] {
            if start.checked_add(length).is_none() {
                return Err(BetaPairError::SpanOverflow { start, length });
            }
        }

        let mut positions = BTreeSet::new();
        let mut exposures = BTreeMap::new();
        let mut residue_pairs = BTreeMap::new();

        for k in 0..length {
            let first = s1 + k;
            let second = s2 + k;
            // The second strand reads the conformation backwards when antiparallel.
            let second_code = if parallel {
                codes[k]
            } else {
                codes[length - 1 - k]
            };

            positions.insert(first);
            positions.insert(second);
            exposures.insert(first, Exposure::from_code(codes[k]));
            exposures.insert(second, Exposure::from_code(second_code));

            let partner = if parallel { s2 + k } else { s2 + length - 1 - k };
            residue_pairs.insert(first, partner);
            residue_pairs.insert(partner, first);
        }

        Ok(Self {
            s1,
            s2,
            length,
            maxgap,
            parallel,
            conformation: conformation.to_string(),
            interleave: 0,
            positions,
            exposures,
            residue_pairs,
        })
    }

    /// Every alignment column covered by either segment.
    pub fn positions(&self) -> &BTreeSet<usize> {
        &self.positions
    }

    pub fn contains(&self, column: usize) -> bool {
        self.positions.contains(&column)
    }

    pub fn exposures(&self) -> &BTreeMap<usize, Exposure> {
        &self.exposures
    }

    pub fn exposure(&self, column: usize) -> Option<Exposure> {
        self.exposures.get(&column).copied()
    }

    /// Column-to-partner map; symmetric by construction.
    pub fn residue_pairs(&self) -> &BTreeMap<usize, usize> {
        &self.residue_pairs
    }

    pub fn partner(&self, column: usize) -> Option<usize> {
        self.residue_pairs.get(&column).copied()
    }

    /// Human-readable one-line summary used by the interleave report.
    pub fn display(&self) -> String {
        format!(
            "BETA: {} and {}, length: {}, interleave: {}",
            self.s1, self.s2, self.length, self.interleave
        )
    }
}

impl fmt::Display for BetaPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#=BETA {}\t{}\t{}\t{}\t{}\t{}",
            self.s1,
            self.s2,
            self.length,
            self.maxgap,
            if self.parallel { "1" } else { "-1" },
            self.conformation
        )
    }
}
