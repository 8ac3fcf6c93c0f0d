//! Smith-Waterman style local alignment reporting every disjoint segment.
//!
//! Cells accumulate a similarity score that restarts at zero instead of going negative.
//! A diagonal step earns twice the gap penalty when the two fingerprint values are closer
//! than the gap penalty and loses one gap penalty otherwise; gap steps lose one gap penalty.
//! Every cell also counts the gap steps taken since its last restart.
//!
//! Segments are extracted greedily from the highest-scoring cell whose gap count is within
//! `max_gaps`. Each reported segment claims the residues it consumes on both sides, and later
//! backtracks stop before the first cell touching a claimed residue, so no residue belongs to
//! more than one segment. A segment scores the gain from the cell where its backtrack
//! stopped; segments without a positive gain are dropped and claim nothing.

use super::config::ScoringConfig;
use super::error::{AlignmentError, ensure_non_empty};
use super::matrix::{AlignmentNode, DpMatrix, Step};
use super::result::{AlignmentResult, LocalAlignmentSet};
use tracing::{debug, instrument};

#[instrument(
    skip_all,
    name = "local_alignment",
    fields(len1 = fingerprint1.len(), len2 = fingerprint2.len(), max_gaps = max_gaps)
)]
pub fn local_align(
    fingerprint1: &[f64],
    fingerprint2: &[f64],
    scoring: &ScoringConfig,
    max_gaps: usize,
) -> Result<LocalAlignmentSet, AlignmentError> {
    ensure_non_empty(fingerprint1, fingerprint2)?;

    let matrix = fill(fingerprint1, fingerprint2, scoring);
    let candidates = candidates(&matrix, max_gaps);
    let num_candidates = candidates.len();
    let segments = extract(&matrix, candidates);

    debug!(
        candidates = num_candidates,
        segments = segments.len(),
        "Local alignment complete."
    );

    Ok(LocalAlignmentSet::new(segments))
}

fn fill(fingerprint1: &[f64], fingerprint2: &[f64], scoring: &ScoringConfig) -> DpMatrix {
    let rows = fingerprint1.len() + 1;
    let cols = fingerprint2.len() + 1;
    let gap = scoring.gap_penalty();
    let mut matrix = DpMatrix::new(rows, cols);

    for i in 1..rows {
        for j in 1..cols {
            let diag = matrix.at(i - 1, j - 1).score
                + scoring.local_step(fingerprint1[i - 1], fingerprint2[j - 1]);
            let top = matrix.at(i - 1, j).score - gap;
            let left = matrix.at(i, j - 1).score - gap;

            let (step, score) = if diag >= top && diag >= left {
                (Step::Diagonal, diag)
            } else if top >= left {
                (Step::Top, top)
            } else {
                (Step::Left, left)
            };

            let node = if score > 0.0 {
                matrix.step(i, j, step, score)
            } else {
                AlignmentNode::ROOT
            };
            matrix.set(i, j, node);
        }
    }

    matrix
}

/// Positive cells within the gap budget, best first. Equal scores keep row-major order.
fn candidates(matrix: &DpMatrix, max_gaps: usize) -> Vec<usize> {
    let mut cells: Vec<usize> = (1..matrix.rows())
        .flat_map(|i| (1..matrix.cols()).map(move |j| (i, j)))
        .map(|(i, j)| matrix.index(i, j))
        .filter(|&cell| {
            let node = matrix.node(cell);
            node.prev.is_some() && node.gaps <= max_gaps
        })
        .collect();
    cells.sort_by(|&a, &b| matrix.node(b).score.total_cmp(&matrix.node(a).score));
    cells
}

fn extract(matrix: &DpMatrix, candidates: Vec<usize>) -> Vec<AlignmentResult> {
    let mut claimed1 = vec![false; matrix.rows() - 1];
    let mut claimed2 = vec![false; matrix.cols() - 1];
    let mut segments = Vec::new();

    for end in candidates {
        let path = matrix.trace(end, |cell| {
            let node = matrix.node(cell);
            node.index1.is_some_and(|i| claimed1[i]) || node.index2.is_some_and(|j| claimed2[j])
        });
        let score = matrix.node(end).score - matrix.node(path.boundary).score;
        if path.cells.is_empty() || score <= 0.0 {
            continue;
        }

        for &cell in &path.cells {
            let node = matrix.node(cell);
            if let Some(i) = node.index1 {
                claimed1[i] = true;
            }
            if let Some(j) = node.index2 {
                claimed2[j] = true;
            }
        }

        segments.push(matrix.to_result(&path, score));
    }

    segments
}
