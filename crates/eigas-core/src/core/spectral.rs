//! Spectral fingerprints of contact matrices.
//!
//! The contact matrix is factored as `C = U diag(s) V^T`. Scaling the rows of `V^T` by
//! `sqrt(s)` gives `R`, whose columns place every residue in a latent space weighted by
//! singular value magnitude. Each residue is then labelled with the singular value of
//! the mode it projects onto most strongly. Singular values are invariant under rotation
//! and translation of the input coordinates, so the resulting sequence can be aligned
//! like a string.

use super::geometry::ContactMatrix;
use nalgebra::DMatrix;
use thiserror::Error;
use tracing::trace;

/// Per-residue spectral signature, in residue order.
pub type Fingerprint = Vec<f64>;

const SVD_ITERATIONS_PER_RESIDUE: usize = 100;
const MIN_SVD_ITERATIONS: usize = 1_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    #[error("Contact matrix is empty")]
    Empty,

    #[error("Contact matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error(
        "Singular value decomposition of a {size}x{size} matrix did not converge within {max_iterations} iterations"
    )]
    NotConverged { size: usize, max_iterations: usize },

    #[error("Singular value decomposition did not produce right singular vectors")]
    MissingVectors,
}

pub fn fingerprint(cmatrix: &ContactMatrix) -> Result<Fingerprint, DecompositionError> {
    let (rows, cols) = cmatrix.shape();
    if rows == 0 || cols == 0 {
        return Err(DecompositionError::Empty);
    }
    if rows != cols {
        return Err(DecompositionError::NotSquare { rows, cols });
    }

    let max_iterations = (SVD_ITERATIONS_PER_RESIDUE * rows).max(MIN_SVD_ITERATIONS);
    let svd = cmatrix
        .clone()
        .try_svd(false, true, f64::EPSILON, max_iterations)
        .ok_or(DecompositionError::NotConverged {
            size: rows,
            max_iterations,
        })?;
    let v_t = svd.v_t.ok_or(DecompositionError::MissingVectors)?;
    let singular_values = svd.singular_values;

    let r = DMatrix::from_diagonal(&singular_values.map(f64::sqrt)) * v_t;

    let fingerprint: Fingerprint = (0..r.ncols())
        .map(|j| singular_values[dominant_mode(&r, j)])
        .collect();

    trace!(
        residues = fingerprint.len(),
        largest_singular_value = singular_values[0],
        "Computed spectral fingerprint."
    );

    Ok(fingerprint)
}

/// Row index of the largest entry in column `j`; the lowest index wins ties.
fn dominant_mode(r: &DMatrix<f64>, j: usize) -> usize {
    let column = r.column(j);
    let mut best_index = 0;
    let mut best_value = column[0];
    for (i, &value) in column.iter().enumerate().skip(1) {
        if value > best_value {
            best_index = i;
            best_value = value;
        }
    }
    best_index
}
