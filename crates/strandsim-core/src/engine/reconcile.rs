use crate::core::models::sequence::AlignedSequence;
use crate::core::utils::symbols::{GAP, is_gap};
use tracing::trace;

/// Projects an external pairwise hit onto the columns of the original gapped query row.
///
/// * `original` - the query row as it appears in the alignment.
/// * `query_aligned`, `subject_aligned` - the external tool's aligned query and hit strings.
/// * `query_start` - the 1-based start of the hit in the ungapped query.
///
/// Hit symbols facing a query-side gap are dropped; gaps of the original row are kept;
/// hit-side gaps carry through as `-`. The result always has the original row's length.
pub fn reconcile(
    original: &AlignedSequence,
    query_aligned: &str,
    subject_aligned: &str,
    query_start: usize,
) -> String {
    let query_gaps: Vec<bool> = query_aligned.chars().map(is_gap).collect();
    let mut subject: Vec<char> = subject_aligned.chars().collect();

    let strip: Vec<usize> = query_gaps
        .iter()
        .enumerate()
        .filter(|&(_, &gap)| gap)
        .map(|(i, _)| i)
        .collect();
    // Highest index first so the remaining indices stay valid.
    for &pos in strip.iter().rev() {
        if pos < subject.len() {
            subject.remove(pos);
        }
    }

    let start_offset = query_start.saturating_sub(1);
    let mut offset = 0;
    let mut output = String::with_capacity(original.len());

    for (idx, &letter) in original.residues().iter().enumerate() {
        if idx < start_offset || is_gap(letter) {
            offset += 1;
            output.push(GAP);
        } else {
            match subject.get(idx - offset) {
                Some(&c) if is_gap(c) => output.push(GAP),
                Some(&c) => output.push(c),
                None => output.push(GAP),
            }
        }
    }

    trace!(
        original = %original.sequence(),
        reconciled = %output,
        query_start,
        "reconciled hit"
    );
    output
}
