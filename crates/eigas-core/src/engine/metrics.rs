use super::config::{AlignmentMode, ScoringConfig};
use super::error::AlignmentError;
use super::global::global_align;
use super::result::AlignmentResult;
use crate::core::protein::Protein;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Alignment failed: {0}")]
    Alignment(#[from] AlignmentError),
}

/// Counts the columns in which both paths hold a residue index.
pub fn aligned_count(path1: &[Option<usize>], path2: &[Option<usize>]) -> usize {
    path1
        .iter()
        .zip(path2)
        .filter(|(a, b)| a.is_some() && b.is_some())
        .count()
}

/// Number of aligned residues for either a protein pair or a pre-computed path pair.
///
/// Exactly one of the two sources must be given. A protein pair is aligned globally with
/// `scoring` first.
pub fn aligned(
    proteins: Option<(&Protein, &Protein)>,
    paths: Option<(&[Option<usize>], &[Option<usize>])>,
    scoring: &ScoringConfig,
) -> Result<usize, MetricsError> {
    match (proteins, paths) {
        (Some((protein1, protein2)), None) => {
            let result = global_align(protein1.fingerprint(), protein2.fingerprint(), scoring)?;
            Ok(result.aligned_count())
        }
        (None, Some((path1, path2))) => {
            if path1.len() != path2.len() {
                return Err(MetricsError::InvalidArgument(format!(
                    "alignment paths differ in length ({} vs {})",
                    path1.len(),
                    path2.len()
                )));
            }
            Ok(aligned_count(path1, path2))
        }
        (Some(_), Some(_)) => Err(MetricsError::InvalidArgument(
            "supply either a protein pair or a path pair, not both".to_string(),
        )),
        (None, None) => Err(MetricsError::InvalidArgument(
            "a protein pair or a path pair is required".to_string(),
        )),
    }
}

/// Re-sums the global per-column costs along `result`'s paths.
///
/// Fails when a path index lies outside its fingerprint.
pub fn path_cost(
    result: &AlignmentResult,
    fingerprint1: &[f64],
    fingerprint2: &[f64],
    scoring: &ScoringConfig,
) -> Result<f64, MetricsError> {
    rescore(
        result,
        fingerprint1,
        fingerprint2,
        |a, b| scoring.substitution_cost(a, b),
        scoring.gap_penalty(),
    )
}

/// Re-sums the local step gains along `result`'s paths.
///
/// For a reported local segment this equals its score.
pub fn local_path_score(
    result: &AlignmentResult,
    fingerprint1: &[f64],
    fingerprint2: &[f64],
    scoring: &ScoringConfig,
) -> Result<f64, MetricsError> {
    rescore(
        result,
        fingerprint1,
        fingerprint2,
        |a, b| scoring.local_step(a, b),
        -scoring.gap_penalty(),
    )
}

fn rescore(
    result: &AlignmentResult,
    fingerprint1: &[f64],
    fingerprint2: &[f64],
    diagonal: impl Fn(f64, f64) -> f64,
    gap: f64,
) -> Result<f64, MetricsError> {
    result
        .columns()
        .map(|(i, j)| -> Result<f64, MetricsError> {
            let a = i.map(|i| value_at(fingerprint1, i, "first")).transpose()?;
            let b = j.map(|j| value_at(fingerprint2, j, "second")).transpose()?;
            Ok(match (a, b) {
                (Some(a), Some(b)) => diagonal(a, b),
                _ => gap,
            })
        })
        .sum()
}

fn value_at(fingerprint: &[f64], index: usize, side: &str) -> Result<f64, MetricsError> {
    fingerprint.get(index).copied().ok_or_else(|| {
        MetricsError::InvalidArgument(format!(
            "index {} is out of range for the {} fingerprint (length {})",
            index,
            side,
            fingerprint.len()
        ))
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedScores {
    pub aligned: usize,
    /// `aligned / min(len1, len2)`.
    pub aligned_fraction: f64,
    pub raw_score: f64,
    /// Global: mean cost per column. Local: score over the best achievable `2g * min(len1, len2)`.
    pub normalized_score: f64,
}

pub fn normalized_scores(
    result: &AlignmentResult,
    len1: usize,
    len2: usize,
    mode: AlignmentMode,
    scoring: &ScoringConfig,
) -> NormalizedScores {
    let aligned = result.aligned_count();
    let shorter = len1.min(len2);
    let aligned_fraction = ratio(aligned as f64, shorter as f64);
    let normalized_score = match mode {
        AlignmentMode::Global => ratio(result.score, result.len() as f64),
        AlignmentMode::Local { .. } => {
            ratio(result.score, scoring.match_bonus() * shorter as f64)
        }
    };

    NormalizedScores {
        aligned,
        aligned_fraction,
        raw_score: result.score,
        normalized_score,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
