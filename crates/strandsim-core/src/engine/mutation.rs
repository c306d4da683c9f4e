use super::error::EngineError;
use super::tables::MutationTables;
use super::utils::sampling::{cumulative_sample, sample_with_replacement};
use crate::core::models::beta_pair::Exposure;
use crate::core::models::beta_set::BetaSet;
use crate::core::models::sequence::AlignedSequence;
use crate::core::utils::symbols::AMINO_ACIDS;
use rand::Rng;
use tracing::trace;

/// Samples the residue that replaces the partner of a `from` residue with the given
/// exposure.
///
/// Falls back to the last alphabet letter when rounding exhausts the distribution.
///
/// # Errors
///
/// Returns [`EngineError::UnknownResidue`] if `from` is not one of the 20 canonical amino
/// acids.
pub fn mutation(
    tables: &MutationTables,
    exposure: Exposure,
    from: char,
    rng: &mut impl Rng,
) -> Result<char, EngineError> {
    let row = tables
        .row(exposure, from)
        .ok_or(EngineError::UnknownResidue(from))?;
    let index = cumulative_sample(row, rng)?;
    Ok(AMINO_ACIDS[index])
}

/// Picks `floor(frequency * candidates.len())` columns with replacement.
pub fn mutation_positions(
    candidates: &[usize],
    frequency: f64,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, EngineError> {
    Ok(sample_with_replacement(candidates, frequency, rng)?)
}

/// Derives a mutated copy of `sequence`.
///
/// For each target column the structural partner is resolved, and unless either end is a
/// gap, a residue drawn from the target's exposure table is written at the *partner*
/// column. Targets are applied in order to the same copy, so later draws see earlier
/// writes.
pub fn mutate_sequence(
    sequence: &AlignedSequence,
    targets: &[usize],
    beta_set: &BetaSet,
    tables: &MutationTables,
    rng: &mut impl Rng,
) -> Result<AlignedSequence, EngineError> {
    let mut mutated = sequence.clone();

    for &column in targets {
        let partner = beta_set.paired_residue(column, rng)?;
        if mutated.is_gap(column) || mutated.is_gap(partner) {
            continue;
        }

        let exposure = beta_set
            .find_with_position(column)
            .next()
            .and_then(|pair| pair.exposure(column))
            .ok_or(EngineError::MissingExposure(column))?;
        let from = mutated
            .residue(column)
            .ok_or(EngineError::ColumnOutOfRange {
                column,
                length: mutated.len(),
            })?;

        let replacement = mutation(tables, exposure, from, rng)?;
        trace!(
            column,
            partner,
            %exposure,
            "{} -> {} at partner",
            from,
            replacement
        );
        mutated.set_residue(partner, replacement);
    }

    Ok(mutated)
}
