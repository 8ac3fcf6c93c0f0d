use nalgebra::{DMatrix, Point3};
use thiserror::Error;

/// Pairwise Euclidean distances between residues, `N x N`.
pub type DistanceMatrix = DMatrix<f64>;

/// Distances rescaled into `[0, 1]` against a cutoff, `N x N`.
pub type ContactMatrix = DMatrix<f64>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Coordinate sequence is empty")]
    Empty,

    #[error("Coordinate {index} has {found} components, expected 3")]
    WrongDimensionality { index: usize, found: usize },

    #[error("Coordinate {index} contains a non-finite component")]
    NonFinite { index: usize },

    #[error("Invalid parameter '{name}': {value} (must be finite and positive)")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Point3<f64>>, GeometryError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row.as_ref() {
            &[x, y, z] => {
                if x.is_finite() && y.is_finite() && z.is_finite() {
                    Ok(Point3::new(x, y, z))
                } else {
                    Err(GeometryError::NonFinite { index })
                }
            }
            other => Err(GeometryError::WrongDimensionality {
                index,
                found: other.len(),
            }),
        })
        .collect()
}

pub fn distance_matrix(coords: &[Point3<f64>]) -> Result<DistanceMatrix, GeometryError> {
    if coords.is_empty() {
        return Err(GeometryError::Empty);
    }
    if let Some(index) = coords
        .iter()
        .position(|p| !p.coords.iter().all(|c| c.is_finite()))
    {
        return Err(GeometryError::NonFinite { index });
    }

    let n = coords.len();
    let mut dmatrix = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = nalgebra::distance(&coords[i], &coords[j]);
            dmatrix[(i, j)] = dist;
            dmatrix[(j, i)] = dist;
        }
    }
    Ok(dmatrix)
}

/// Rescales distances into contacts: `1 - d / cutoff` inside the cutoff, `0` beyond it.
pub fn contact_matrix(
    dmatrix: &DistanceMatrix,
    cutoff: f64,
) -> Result<ContactMatrix, GeometryError> {
    if !(cutoff.is_finite() && cutoff > 0.0) {
        return Err(GeometryError::InvalidParameter {
            name: "cutoff",
            value: cutoff,
        });
    }

    let inverse = 1.0 / cutoff;
    Ok(dmatrix.map(|dist| {
        if (0.0..=cutoff).contains(&dist) {
            1.0 - inverse * dist
        } else {
            0.0
        }
    }))
}
