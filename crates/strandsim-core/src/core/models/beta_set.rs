use super::beta_pair::BetaPair;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    #[error("Column {0} has no recorded structural partner")]
    Unpaired(usize),
}

/// All strand pairings of one alignment, with aggregated column indices.
///
/// The indices only ever grow through [`BetaSet::add`]; removing pairs means building a new
/// set from the surviving records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BetaSet {
    strand_pairs: Vec<BetaPair>,
    residue_pairs: BTreeMap<usize, BTreeSet<usize>>,
    beta_positions: BTreeSet<usize>,
}

impl BetaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = BetaPair>) -> Self {
        let mut set = Self::new();
        for pair in pairs {
            set.add(pair);
        }
        set
    }

    pub fn add(&mut self, pair: BetaPair) {
        for (&column, &partner) in pair.residue_pairs() {
            self.residue_pairs.entry(column).or_default().insert(partner);
        }
        self.beta_positions.extend(pair.positions().iter().copied());
        self.strand_pairs.push(pair);
    }

    pub fn strand_pairs(&self) -> &[BetaPair] {
        &self.strand_pairs
    }

    pub fn len(&self) -> usize {
        self.strand_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strand_pairs.is_empty()
    }

    pub fn beta_positions(&self) -> &BTreeSet<usize> {
        &self.beta_positions
    }

    pub fn residue_pairs(&self) -> &BTreeMap<usize, BTreeSet<usize>> {
        &self.residue_pairs
    }

    /// Recomputes every pair's interleave from scratch.
    ///
    /// A pair `a` gains one for each other pair `b` (by slot, so identical records at
    /// different slots still count) that starts inside `a`'s span, or that starts at or after
    /// `a.s1` with its second strand no later than `a.s2`. The count is asymmetric.
    pub fn compute_interleave(&mut self) {
        let spans: Vec<(usize, usize)> = self.strand_pairs.iter().map(|b| (b.s1, b.s2)).collect();

        for (i, pair) in self.strand_pairs.iter_mut().enumerate() {
            let (s1, s2) = (pair.s1, pair.s2);
            pair.interleave = spans
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .filter(|&(_, &(other_s1, other_s2))| {
                    (other_s1 >= s1 && other_s1 <= s2) || (other_s1 >= s1 && other_s2 <= s2)
                })
                .count();
        }
    }

    pub fn find_with_position(&self, column: usize) -> impl Iterator<Item = &BetaPair> {
        self.strand_pairs.iter().filter(move |b| b.contains(column))
    }

    /// Columns covered by at least one pair whose interleave is `>= threshold`.
    pub fn beta_positions_with_min_interleave(&self, threshold: usize) -> BTreeSet<usize> {
        self.strand_pairs
            .iter()
            .filter(|b| b.interleave >= threshold)
            .flat_map(|b| b.positions().iter().copied())
            .collect()
    }

    pub fn find_with_max_interleave(&self, threshold: usize) -> Vec<&BetaPair> {
        self.strand_pairs
            .iter()
            .filter(|b| b.interleave <= threshold)
            .collect()
    }

    pub fn find_with_min_interleave(&self, threshold: usize) -> Vec<&BetaPair> {
        self.strand_pairs
            .iter()
            .filter(|b| b.interleave >= threshold)
            .collect()
    }

    pub fn paired_residues(&self, column: usize) -> Option<&BTreeSet<usize>> {
        self.residue_pairs.get(&column)
    }

    /// Picks one partner of `column`, uniformly among competing pairings when there are
    /// several.
    pub fn paired_residue(&self, column: usize, rng: &mut impl Rng) -> Result<usize, PairingError> {
        let partners = self
            .paired_residues(column)
            .filter(|p| !p.is_empty())
            .ok_or(PairingError::Unpaired(column))?;

        if partners.len() == 1 {
            return partners
                .first()
                .copied()
                .ok_or(PairingError::Unpaired(column));
        }
        partners
            .iter()
            .copied()
            .choose(rng)
            .ok_or(PairingError::Unpaired(column))
    }
}
