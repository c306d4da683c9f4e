use crate::core::utils::symbols;
use std::fmt;

/// Separator written between a row's name and its residues.
const NAME_PADDING: &str = "     ";

/// One named, gapped row of an alignment.
///
/// The residues are upper-cased on construction and the row length never changes:
/// edits replace symbols in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    pub name: String,
    residues: Vec<char>,
}

impl AlignedSequence {
    pub fn new(name: impl Into<String>, sequence: &str) -> Self {
        Self {
            name: name.into(),
            residues: sequence.chars().map(|c| c.to_ascii_uppercase()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residue(&self, column: usize) -> Option<char> {
        self.residues.get(column).copied()
    }

    pub fn residues(&self) -> &[char] {
        &self.residues
    }

    /// Overwrites the symbol at `column`. Returns `false` when the column is out of range.
    pub fn set_residue(&mut self, column: usize, symbol: char) -> bool {
        match self.residues.get_mut(column) {
            Some(slot) => {
                *slot = symbol.to_ascii_uppercase();
                true
            }
            None => false,
        }
    }

    /// Columns beyond the row are treated as gaps.
    pub fn is_gap(&self, column: usize) -> bool {
        self.residue(column).is_none_or(symbols::is_gap)
    }

    pub fn sequence(&self) -> String {
        self.residues.iter().collect()
    }

    /// The residues with every gap symbol removed.
    pub fn ungapped(&self) -> String {
        self.residues
            .iter()
            .filter(|&&c| !symbols::is_gap(c))
            .collect()
    }
}

impl fmt::Display for AlignedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, NAME_PADDING, self.sequence())
    }
}
