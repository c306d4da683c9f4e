use crate::core::io::hits::{SearchHit, read_hits_from_path};
use crate::core::io::stockholm::StockholmFile;
use crate::core::io::traits::AlignmentFile;
use crate::core::models::alignment::Alignment;
use crate::core::models::sequence::AlignedSequence;
use crate::engine::config::AugmentConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::reconcile::reconcile;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

const EXACT_IDENTITY: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentSummary {
    pub rows_searched: usize,
    pub hits_appended: usize,
    pub hits_rejected: usize,
    pub hits_unmatched: usize,
}

/// True for rows produced by the mutation simulator, named `m_<replica>_<original>`.
pub fn is_mutated_name(name: &str) -> bool {
    name.strip_prefix("m_")
        .and_then(|rest| rest.split_once('_'))
        .is_some_and(|(digits, _)| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Row name for a reconciled hit; every whitespace run becomes a single `_`.
pub fn hit_row_name(subject_id: &str, row_name: &str) -> String {
    let raw = format!("{}|matched to {}", subject_id, row_name);
    let mut name = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name
}

/// Accepts hits below 100% identity that reach `min_identity`.
pub fn accepts_hit(hit: &SearchHit, config: &AugmentConfig) -> bool {
    hit.percent_identity != EXACT_IDENTITY && hit.percent_identity >= config.min_identity
}

/// Reconciles every accepted hit against the row it was searched with and appends it.
#[instrument(skip_all, name = "augment_alignment", fields(hits = hits.len()))]
pub fn augment_alignment(
    alignment: &mut Alignment,
    hits: &[SearchHit],
    config: &AugmentConfig,
    reporter: &ProgressReporter,
) -> Result<AugmentSummary, EngineError> {
    config.validate()?;

    let mut by_query: HashMap<&str, Vec<&SearchHit>> = HashMap::new();
    for hit in hits {
        by_query.entry(hit.query_id.as_str()).or_default().push(hit);
    }

    let mut summary = AugmentSummary::default();
    let mut reconciled = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    reporter.report(Progress::TaskStart {
        total_steps: alignment.sequences().len() as u64,
    });
    for row in alignment.sequences() {
        reporter.report(Progress::TaskIncrement);
        if config.skip_mutated && is_mutated_name(&row.name) {
            continue;
        }
        summary.rows_searched += 1;
        seen.insert(row.name.as_str());

        for hit in by_query.get(row.name.as_str()).into_iter().flatten() {
            let name = hit_row_name(&hit.subject_id, &row.name);
            if !accepts_hit(hit, config) {
                debug!(hit = %name, identity = hit.percent_identity, "Skipping hit.");
                summary.hits_rejected += 1;
                continue;
            }
            let aligned = reconcile(row, &hit.query_aligned, &hit.subject_aligned, hit.query_start);
            reconciled.push(AlignedSequence::new(name, &aligned));
        }
    }
    reporter.report(Progress::TaskFinish);

    summary.hits_unmatched = hits
        .iter()
        .filter(|h| !seen.contains(h.query_id.as_str()))
        .count();
    if summary.hits_unmatched > 0 {
        warn!(
            count = summary.hits_unmatched,
            "Some hits name a query that is not a searched row of the alignment."
        );
        reporter.report(Progress::Message(format!(
            "{} hit(s) did not match a searched row",
            summary.hits_unmatched
        )));
    }

    summary.hits_appended = reconciled.len();
    for row in reconciled {
        alignment.append(row);
    }
    Ok(summary)
}

/// Augments `input` with the hits in `hits_path` and writes the result to `output`.
#[instrument(skip_all, name = "augment_workflow")]
pub fn run(
    input: &Path,
    hits_path: &Path,
    output: &Path,
    config: &AugmentConfig,
    reporter: &ProgressReporter,
) -> Result<AugmentSummary, EngineError> {
    config.validate()?;

    let mut alignment = reporter.phase("Loading Alignment", || {
        StockholmFile::read_from_path(input)
    })?;
    let hits = reporter.phase("Loading Hits", || read_hits_from_path(hits_path))?;
    let summary = augment_alignment(&mut alignment, &hits, config, reporter)?;
    reporter.phase("Writing Alignment", || {
        StockholmFile::write_to_path(&alignment, output)
    })?;

    info!(
        appended = summary.hits_appended,
        rejected = summary.hits_rejected,
        "Augmentation complete."
    );
    Ok(summary)
}
