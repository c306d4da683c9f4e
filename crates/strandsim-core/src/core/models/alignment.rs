use super::beta_set::BetaSet;
use super::sequence::AlignedSequence;

/// A beta-annotated alignment: metadata, rows and the strand pairing set.
///
/// Original rows and rows appended later (simulated or reconciled homologs) are kept apart
/// so that workflows iterate only the rows that were read from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alignment {
    pub header: Vec<String>,
    pub tail: Option<String>,
    sequences: Vec<AlignedSequence>,
    appended: Vec<AlignedSequence>,
    beta_set: BetaSet,
}

impl Alignment {
    /// Assembles an alignment and computes the interleave of every pair.
    pub fn new(
        header: Vec<String>,
        beta_set: BetaSet,
        sequences: Vec<AlignedSequence>,
        tail: Option<String>,
    ) -> Self {
        let mut alignment = Self {
            header,
            tail,
            sequences,
            appended: Vec::new(),
            beta_set,
        };
        alignment.beta_set.compute_interleave();
        alignment
    }

    pub fn beta_set(&self) -> &BetaSet {
        &self.beta_set
    }

    pub fn sequences(&self) -> &[AlignedSequence] {
        &self.sequences
    }

    pub fn appended(&self) -> &[AlignedSequence] {
        &self.appended
    }

    /// Original rows followed by appended rows, in output order.
    pub fn all_sequences(&self) -> impl Iterator<Item = &AlignedSequence> {
        self.sequences.iter().chain(self.appended.iter())
    }

    pub fn append(&mut self, sequence: AlignedSequence) {
        self.appended.push(sequence);
    }

    /// Keeps only the pairs with `interleave <= threshold`.
    ///
    /// The set is rebuilt from the surviving records, which keep the interleave they had
    /// in the full set.
    pub fn simplify_betas(&mut self, threshold: usize) {
        let kept: Vec<_> = self
            .beta_set
            .find_with_max_interleave(threshold)
            .into_iter()
            .cloned()
            .collect();
        self.beta_set = BetaSet::from_pairs(kept);
    }

    /// One summary line per pair, in record order.
    pub fn display_betas(&self) -> Vec<String> {
        self.beta_set
            .strand_pairs()
            .iter()
            .map(|b| b.display())
            .collect()
    }

    pub fn beta_strings(&self) -> Vec<String> {
        self.beta_set
            .strand_pairs()
            .iter()
            .map(|b| b.to_string())
            .collect()
    }

    pub fn sequence_strings(&self) -> Vec<String> {
        self.all_sequences().map(|s| s.to_string()).collect()
    }
}
