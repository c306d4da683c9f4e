use crate::core::io::stockholm::StockholmFile;
use crate::core::io::traits::AlignmentFile;
use crate::core::models::alignment::Alignment;
use crate::engine::config::{SimulationConfig, SimulationParams};
use crate::engine::error::EngineError;
use crate::engine::mutation::{mutate_sequence, mutation_positions};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tables::MutationTables;
use crate::engine::utils::sampling::validate_frequency;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub mutable_columns: usize,
    pub original_rows: usize,
    pub simulated_rows: usize,
}

/// Name given to the `replica`-th simulated copy of a row.
pub fn replica_name(replica: usize, original: &str) -> String {
    format!("m_{}_{}", replica, original)
}

/// Appends `copies_per_sequence` mutated replicas of every original row to `alignment`.
///
/// Mutable columns are the paired columns whose pair has `interleave >= threshold`. When
/// there are none the alignment is left untouched.
#[instrument(
    skip_all,
    name = "simulate_alignment",
    fields(frequency = params.frequency, copies = params.copies_per_sequence)
)]
pub fn simulate_alignment(
    alignment: &mut Alignment,
    tables: &MutationTables,
    params: &SimulationParams,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<SimulationSummary, EngineError> {
    validate_frequency(params.frequency)?;

    let candidates: Vec<usize> = alignment
        .beta_set()
        .beta_positions_with_min_interleave(params.interleave_threshold)
        .into_iter()
        .collect();
    let original_rows = alignment.sequences().len();

    if candidates.is_empty() {
        warn!(
            threshold = params.interleave_threshold,
            "No beta positions meet the interleave threshold; alignment left unchanged."
        );
        return Ok(SimulationSummary {
            mutable_columns: 0,
            original_rows,
            simulated_rows: 0,
        });
    }
    info!(
        mutable_columns = candidates.len(),
        rows = original_rows,
        "Simulating mutated replicas."
    );

    reporter.report(Progress::TaskStart {
        total_steps: original_rows as u64,
    });
    let mut simulated = Vec::with_capacity(original_rows * params.copies_per_sequence);
    for sequence in alignment.sequences() {
        for replica in 0..params.copies_per_sequence {
            let targets = mutation_positions(&candidates, params.frequency, rng)?;
            let mut mutated =
                mutate_sequence(sequence, &targets, alignment.beta_set(), tables, rng)?;
            mutated.name = replica_name(replica, &sequence.name);
            debug!(row = %sequence.name, replica, sites = targets.len(), "Derived replica.");
            simulated.push(mutated);
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    let simulated_rows = simulated.len();
    for row in simulated {
        alignment.append(row);
    }

    Ok(SimulationSummary {
        mutable_columns: candidates.len(),
        original_rows,
        simulated_rows,
    })
}

/// Reads `input`, appends simulated replicas and writes the result to `output`.
///
/// The frequency is validated before any file is touched.
#[instrument(skip_all, name = "mutate_alignment")]
pub fn mutate_alignment(
    input: &Path,
    output: &Path,
    tables: &MutationTables,
    params: &SimulationParams,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<SimulationSummary, EngineError> {
    validate_frequency(params.frequency)?;

    let mut alignment = reporter.phase("Loading Alignment", || {
        StockholmFile::read_from_path(input)
    })?;
    let summary = simulate_alignment(&mut alignment, tables, params, rng, reporter)?;
    reporter.phase("Writing Alignment", || {
        StockholmFile::write_to_path(&alignment, output)
    })?;

    info!(
        simulated = summary.simulated_rows,
        output = %output.display(),
        "Simulation complete."
    );
    Ok(summary)
}

/// Full simulation run: loads the substitution tables, seeds the generator from the
/// configuration and mutates `input` into `output`.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    config: &SimulationConfig,
    input: &Path,
    output: &Path,
    reporter: &ProgressReporter,
) -> Result<SimulationSummary, EngineError> {
    validate_frequency(config.params.frequency)?;

    let tables = reporter.phase("Loading Tables", || {
        MutationTables::load(
            &config.tables.exposed_table_path,
            &config.tables.buried_table_path,
        )
    })?;
    let mut rng = StdRng::seed_from_u64(config.params.seed);
    mutate_alignment(input, output, &tables, &config.params, &mut rng, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::beta_pair::BetaPair;
    use crate::core::models::beta_set::BetaSet;
    use crate::core::models::sequence::AlignedSequence;
    use crate::engine::config::SimulationConfigBuilder;
    use crate::engine::tables::test_support::{constant_tables, identity_csv};
    use crate::engine::utils::sampling::SamplingError;
    use std::fs;
    use tempfile::tempdir;

    const ALIGNMENT: &str = "# STOCKHOLM 1.0\n\
#=BETA 0 4 2 0 1 ii\n\
\n\
seq1     ACDEFGHI\n\
seq2     AC-EFGHI\n\
//\n";

    fn params(frequency: f64, copies: usize, threshold: usize) -> SimulationParams {
        SimulationParams {
            frequency,
            copies_per_sequence: copies,
            interleave_threshold: threshold,
            seed: 1,
        }
    }

    fn small_alignment() -> Alignment {
        let pair = BetaPair::new(0, 4, 2, 0, true, "ii").unwrap();
        Alignment::new(
            vec!["# STOCKHOLM 1.0".to_string()],
            BetaSet::from_pairs([pair]),
            vec![
                AlignedSequence::new("seq1", "ACDEFGHI"),
                AlignedSequence::new("seq2", "AC-EFGHI"),
            ],
            Some("//".to_string()),
        )
    }

    #[test]
    fn replica_name_prefixes_index() {
        assert_eq!(replica_name(0, "seq1"), "m_0_seq1");
        assert_eq!(replica_name(12, "1abc_A"), "m_12_1abc_A");
    }

    #[test]
    fn simulate_alignment_appends_named_replicas_per_row() {
        let mut alignment = small_alignment();
        let tables = constant_tables('W', 'K');
        let mut rng = StdRng::seed_from_u64(1);

        let summary = simulate_alignment(
            &mut alignment,
            &tables,
            &params(1.0, 2, 0),
            &mut rng,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(summary.mutable_columns, 4);
        assert_eq!(summary.simulated_rows, 4);
        let names: Vec<&str> = alignment.appended().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["m_0_seq1", "m_1_seq1", "m_0_seq2", "m_1_seq2"]);
        assert_eq!(alignment.sequences().len(), 2);
    }

    #[test]
    fn simulate_alignment_only_changes_paired_ungapped_columns() {
        let mut alignment = small_alignment();
        let tables = constant_tables('W', 'K');
        let mut rng = StdRng::seed_from_u64(7);

        simulate_alignment(
            &mut alignment,
            &tables,
            &params(1.0, 5, 0),
            &mut rng,
            &ProgressReporter::new(),
        )
        .unwrap();

        for replica in alignment.appended() {
            let source = if replica.name.ends_with("seq1") {
                "ACDEFGHI"
            } else {
                "AC-EFGHI"
            };
            assert_eq!(replica.len(), source.len());
            for (col, (new, old)) in replica.sequence().chars().zip(source.chars()).enumerate() {
                if new != old {
                    assert!([0, 1, 4, 5].contains(&col), "column {col} changed");
                    assert_eq!(new, 'W');
                }
            }
            assert_eq!(replica.residue(2), source.chars().nth(2));
        }
    }

    #[test]
    fn simulate_alignment_leaves_alignment_unchanged_without_mutable_columns() {
        let mut alignment = small_alignment();
        let before = alignment.clone();
        let tables = constant_tables('W', 'K');
        let mut rng = StdRng::seed_from_u64(1);

        let summary = simulate_alignment(
            &mut alignment,
            &tables,
            &params(0.5, 3, 1),
            &mut rng,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(summary.simulated_rows, 0);
        assert_eq!(alignment, before);
    }

    #[test]
    fn simulate_alignment_rejects_invalid_frequency_even_without_candidates() {
        let mut alignment = small_alignment();
        let tables = constant_tables('W', 'K');
        let mut rng = StdRng::seed_from_u64(1);

        let err = simulate_alignment(
            &mut alignment,
            &tables,
            &params(2.0, 1, 5),
            &mut rng,
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Sampling(SamplingError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn simulate_alignment_is_reproducible_for_a_seed() {
        let tables = constant_tables('W', 'K');
        let simulate_with = |seed| {
            let mut alignment = small_alignment();
            let mut rng = StdRng::seed_from_u64(seed);
            simulate_alignment(
                &mut alignment,
                &tables,
                &params(0.5, 3, 0),
                &mut rng,
                &ProgressReporter::new(),
            )
            .unwrap();
            alignment
        };
        assert_eq!(simulate_with(42), simulate_with(42));
    }

    #[test]
    fn run_writes_simulated_alignment_to_disk() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ssi");
        let output = dir.path().join("out.ssi");
        let exposed = dir.path().join("exposed.csv");
        let buried = dir.path().join("buried.csv");
        fs::write(&input, ALIGNMENT).unwrap();
        fs::write(&exposed, identity_csv()).unwrap();
        fs::write(&buried, identity_csv()).unwrap();

        let config = SimulationConfigBuilder::new()
            .exposed_table_path(exposed)
            .buried_table_path(buried)
            .frequency(1.0)
            .copies_per_sequence(1)
            .build()
            .unwrap();

        let summary = run(&config, &input, &output, &ProgressReporter::new()).unwrap();
        assert_eq!(summary.simulated_rows, 2);

        // The identity table copies the sampled residue onto its partner.
        let written = StockholmFile::read_from_path(&output).unwrap();
        assert_eq!(written.sequences().len(), 4);
        let last = fs::read_to_string(&output).unwrap();
        assert!(last.contains("m_0_seq1"));
        assert!(last.trim_end().ends_with("//"));
    }

    #[test]
    fn run_fails_on_missing_tables() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ssi");
        fs::write(&input, ALIGNMENT).unwrap();
        let config = SimulationConfigBuilder::new()
            .exposed_table_path(dir.path().join("nope.csv"))
            .buried_table_path(dir.path().join("nope.csv"))
            .frequency(0.5)
            .copies_per_sequence(1)
            .build()
            .unwrap();

        let err = run(
            &config,
            &input,
            &dir.path().join("out.ssi"),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Tables(_)));
    }
}
