use super::geometry::{self, ContactMatrix, GeometryError};
use super::spectral::{self, DecompositionError, Fingerprint};
use nalgebra::Point3;
use thiserror::Error;
use tracing::{debug, instrument};

/// Supplies the ordered alpha-carbon coordinates of one protein.
///
/// File formats live outside this crate; anything that can name a protein and hand
/// over its backbone trace can implement this trait.
pub trait CoordinateProvider {
    fn name(&self) -> &str;

    fn coords(&self) -> &[Point3<f64>];
}

/// An in-memory coordinate provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCoordinates {
    name: String,
    coords: Vec<Point3<f64>>,
}

impl RawCoordinates {
    pub fn new(name: impl Into<String>, coords: Vec<Point3<f64>>) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }

    /// Builds a provider from untyped rows, each of which must hold exactly `x, y, z`.
    pub fn from_rows<R: AsRef<[f64]>>(
        name: impl Into<String>,
        rows: &[R],
    ) -> Result<Self, GeometryError> {
        Ok(Self::new(name, geometry::points_from_rows(rows)?))
    }
}

impl CoordinateProvider for RawCoordinates {
    fn name(&self) -> &str {
        &self.name
    }

    fn coords(&self) -> &[Point3<f64>] {
        &self.coords
    }
}

#[derive(Debug, Error)]
pub enum ProteinError {
    #[error("Failed to build geometry for protein '{name}': {source}")]
    Geometry {
        name: String,
        #[source]
        source: GeometryError,
    },

    #[error("Failed to compute fingerprint for protein '{name}': {source}")]
    Decomposition {
        name: String,
        #[source]
        source: DecompositionError,
    },
}

impl ProteinError {
    pub fn protein_name(&self) -> &str {
        match self {
            ProteinError::Geometry { name, .. } | ProteinError::Decomposition { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Protein {
    name: String,
    cutoff: f64,
    coords: Vec<Point3<f64>>,
    contact_matrix: ContactMatrix,
    fingerprint: Fingerprint,
}

impl Protein {
    #[instrument(skip_all, name = "protein_construction", fields(name = provider.name()))]
    pub fn new<P>(provider: &P, cutoff: f64) -> Result<Self, ProteinError>
    where
        P: CoordinateProvider + ?Sized,
    {
        let name = provider.name().to_string();
        let coords = provider.coords().to_vec();

        let geometry_error = |source| ProteinError::Geometry {
            name: name.clone(),
            source,
        };
        let dmatrix = geometry::distance_matrix(&coords).map_err(geometry_error)?;
        let contact_matrix = geometry::contact_matrix(&dmatrix, cutoff).map_err(geometry_error)?;

        let fingerprint =
            spectral::fingerprint(&contact_matrix).map_err(|source| ProteinError::Decomposition {
                name: name.clone(),
                source,
            })?;

        debug!(residues = coords.len(), cutoff, "Protein fingerprint ready.");

        Ok(Self {
            name,
            cutoff,
            coords,
            contact_matrix,
            fingerprint,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn coords(&self) -> &[Point3<f64>] {
        &self.coords
    }

    pub fn contact_matrix(&self) -> &ContactMatrix {
        &self.contact_matrix
    }

    pub fn fingerprint(&self) -> &[f64] {
        &self.fingerprint
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag(name: &str, n: usize) -> RawCoordinates {
        let coords = (0..n)
            .map(|i| {
                let y = if i % 2 == 0 { 0.0 } else { 1.2 };
                Point3::new(3.6 * i as f64, y, 0.1 * i as f64)
            })
            .collect();
        RawCoordinates::new(name, coords)
    }

    #[test]
    fn protein_exposes_name_and_fingerprint_of_matching_length() {
        let provider = zigzag("1ABC", 9);
        let protein = Protein::new(&provider, 8.0).unwrap();
        assert_eq!(protein.name(), "1ABC");
        assert_eq!(protein.len(), 9);
        assert_eq!(protein.fingerprint().len(), protein.coords().len());
        assert_eq!(protein.contact_matrix().shape(), (9, 9));
        assert_eq!(protein.cutoff(), 8.0);
        assert!(!protein.is_empty());
    }

    #[test]
    fn single_residue_protein_has_unit_fingerprint() {
        let provider = RawCoordinates::new("tiny", vec![Point3::new(1.0, 1.0, 1.0)]);
        let protein = Protein::new(&provider, 8.0).unwrap();
        assert_eq!(protein.fingerprint().len(), 1);
        assert!((protein.fingerprint()[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn construction_is_deterministic() {
        let provider = zigzag("det", 15);
        let a = Protein::new(&provider, 8.0).unwrap();
        let b = Protein::new(&provider, 8.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_provider_fails_with_protein_name_attached() {
        let provider = RawCoordinates::new("empty", Vec::new());
        let err = Protein::new(&provider, 8.0).unwrap_err();
        assert!(matches!(
            &err,
            ProteinError::Geometry {
                source: GeometryError::Empty,
                ..
            }
        ));
        assert_eq!(err.protein_name(), "empty");
        assert!(err.to_string().contains("'empty'"));
    }

    #[test]
    fn invalid_cutoff_fails_with_protein_name_attached() {
        let provider = zigzag("badcut", 4);
        let err = Protein::new(&provider, -2.0).unwrap_err();
        assert!(matches!(
            err,
            ProteinError::Geometry {
                source: GeometryError::InvalidParameter { name: "cutoff", .. },
                ..
            }
        ));
    }

    #[test]
    fn raw_coordinates_from_rows_validates_dimensionality() {
        let err = RawCoordinates::from_rows("bad", &[vec![1.0, 2.0, 3.0, 4.0]]).unwrap_err();
        assert_eq!(err, GeometryError::WrongDimensionality { index: 0, found: 4 });

        let ok = RawCoordinates::from_rows("good", &[[0.0, 0.0, 0.0], [3.8, 0.0, 0.0]]).unwrap();
        assert_eq!(ok.name(), "good");
        assert_eq!(ok.coords().len(), 2);
    }

    #[test]
    fn provider_trait_objects_are_accepted() {
        let provider: Box<dyn CoordinateProvider> = Box::new(zigzag("boxed", 5));
        let protein = Protein::new(provider.as_ref(), 8.0).unwrap();
        assert_eq!(protein.name(), "boxed");
    }
}
