//! Needleman-Wunsch style global alignment of fingerprints.
//!
//! Unlike classical similarity alignment this is a minimization: a diagonal step costs the
//! absolute fingerprint difference and every gap step costs the gap penalty. Ties resolve
//! diagonal first, then top, then left, which fixes the reconstructed path.

use super::config::ScoringConfig;
use super::error::{AlignmentError, ensure_non_empty};
use super::matrix::{DpMatrix, Step};
use super::result::AlignmentResult;
use tracing::{instrument, trace};

#[instrument(skip_all, name = "global_alignment", fields(len1 = fingerprint1.len(), len2 = fingerprint2.len()))]
pub fn global_align(
    fingerprint1: &[f64],
    fingerprint2: &[f64],
    scoring: &ScoringConfig,
) -> Result<AlignmentResult, AlignmentError> {
    ensure_non_empty(fingerprint1, fingerprint2)?;

    let matrix = fill(fingerprint1, fingerprint2, scoring);
    let end = matrix.index(matrix.rows() - 1, matrix.cols() - 1);
    let score = matrix.node(end).score;
    let path = matrix.trace(end, |_| false);

    trace!(score, columns = path.cells.len(), "Global alignment complete.");

    Ok(matrix.to_result(&path, score))
}

fn fill(fingerprint1: &[f64], fingerprint2: &[f64], scoring: &ScoringConfig) -> DpMatrix {
    let rows = fingerprint1.len() + 1;
    let cols = fingerprint2.len() + 1;
    let gap = scoring.gap_penalty();
    let mut matrix = DpMatrix::new(rows, cols);

    for i in 1..rows {
        let node = matrix.step(i, 0, Step::Top, i as f64 * gap);
        matrix.set(i, 0, node);
    }
    for j in 1..cols {
        let node = matrix.step(0, j, Step::Left, j as f64 * gap);
        matrix.set(0, j, node);
    }

    for i in 1..rows {
        for j in 1..cols {
            let diag = matrix.at(i - 1, j - 1).score
                + scoring.substitution_cost(fingerprint1[i - 1], fingerprint2[j - 1]);
            let top = matrix.at(i - 1, j).score + gap;
            let left = matrix.at(i, j - 1).score + gap;

            let (step, score) = if diag <= top && diag <= left {
                (Step::Diagonal, diag)
            } else if top <= left {
                (Step::Top, top)
            } else {
                (Step::Left, left)
            };
            let node = matrix.step(i, j, step, score);
            matrix.set(i, j, node);
        }
    }

    matrix
}
