use crate::core::protein::Protein;
use crate::engine::config::{AlignmentMode, ComparisonConfig};
use crate::engine::error::EngineError;
use crate::engine::global::global_align;
use crate::engine::local::local_align;
use crate::engine::metrics::{NormalizedScores, normalized_scores};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::result::AlignmentResult;
use itertools::Itertools;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const PHASE_NAME: &str = "Pairwise Comparison";

/// Summary of one protein pair.
///
/// In local mode `alignment` is the best segment, or an empty alignment scoring zero when
/// the pair shares no segment at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PairComparison {
    pub name1: String,
    pub name2: String,
    pub len1: usize,
    pub len2: usize,
    pub score: f64,
    pub aligned: usize,
    pub scores: NormalizedScores,
    pub alignment: AlignmentResult,
}

pub fn compare_pair(
    protein1: &Protein,
    protein2: &Protein,
    config: &ComparisonConfig,
) -> Result<PairComparison, EngineError> {
    let fingerprint1 = protein1.fingerprint();
    let fingerprint2 = protein2.fingerprint();

    let alignment = match config.mode {
        AlignmentMode::Global => global_align(fingerprint1, fingerprint2, &config.scoring),
        AlignmentMode::Local { max_gaps } => {
            local_align(fingerprint1, fingerprint2, &config.scoring, max_gaps)
                .map(|set| set.into_vec().into_iter().next().unwrap_or_default())
        }
    }
    .map_err(|source| EngineError::Alignment {
        protein1: protein1.name().to_string(),
        protein2: protein2.name().to_string(),
        source,
    })?;

    let scores = normalized_scores(
        &alignment,
        protein1.len(),
        protein2.len(),
        config.mode,
        &config.scoring,
    );

    debug!(
        protein1 = protein1.name(),
        protein2 = protein2.name(),
        score = alignment.score,
        aligned = scores.aligned,
        "Pair compared."
    );

    Ok(PairComparison {
        name1: protein1.name().to_string(),
        name2: protein2.name().to_string(),
        len1: protein1.len(),
        len2: protein2.len(),
        score: alignment.score,
        aligned: scores.aligned,
        scores,
        alignment,
    })
}

/// Compares every unordered pair of `proteins`.
///
/// Results follow combination order: `(0, 1), (0, 2), ..., (1, 2), ...`.
#[instrument(skip_all, name = "comparison_workflow", fields(proteins = proteins.len()))]
pub fn run(
    proteins: &[Protein],
    config: &ComparisonConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<PairComparison>, EngineError> {
    reporter.report(Progress::PhaseStart { name: PHASE_NAME });

    let pairs: Vec<(usize, usize)> = (0..proteins.len()).tuple_combinations().collect();
    if pairs.is_empty() {
        warn!("Fewer than two proteins given. No pairs to compare.");
        reporter.report(Progress::PhaseFinish);
        return Ok(Vec::new());
    }

    info!(pairs = pairs.len(), mode = ?config.mode, "Starting all-pairs comparison.");

    let results: Vec<Result<PairComparison, EngineError>> = reporter.task(pairs.len(), || {
        #[cfg(not(feature = "parallel"))]
        let iterator = pairs.iter();

        #[cfg(feature = "parallel")]
        let iterator = pairs.par_iter();

        iterator
            .map(|&(i, j)| {
                let comparison = compare_pair(&proteins[i], &proteins[j], config);
                reporter.report(Progress::TaskIncrement);
                comparison
            })
            .collect()
    });

    let comparisons = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    if let AlignmentMode::Local { max_gaps } = config.mode {
        let unmatched = comparisons
            .iter()
            .filter(|c| c.alignment.is_empty())
            .count();
        if unmatched > 0 {
            warn!(unmatched, max_gaps, "Some pairs share no local segment.");
            reporter.report(Progress::Message(format!(
                "{} of {} pairs share no local segment (max gaps {})",
                unmatched,
                comparisons.len(),
                max_gaps
            )));
        }
    }

    info!(pairs = comparisons.len(), "All-pairs comparison finished.");
    reporter.report(Progress::PhaseFinish);
    Ok(comparisons)
}
