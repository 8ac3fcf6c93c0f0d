use crate::error::{CliError, Result};
use eigas::core::geometry::{self, GeometryError};
use eigas::core::protein::CoordinateProvider;
use nalgebra::Point3;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateParseError {
    #[error("Line {line}: expected 3 coordinates, found {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("Line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("No coordinates found")]
    Empty,

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Alpha-carbon coordinates read from a plain-text file.
///
/// Each non-blank line holds `x y z` separated by tabs or spaces. Text after `#` is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCoordinates {
    name: String,
    coords: Vec<Point3<f64>>,
}

impl TextCoordinates {
    /// Reads `path`, naming the protein after the file stem.
    pub fn from_file(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CliError::Argument(format!("'{}' does not name a file", path.display()))
            })?;
        let content = std::fs::read_to_string(path)?;
        let parsed = Self::parse(name, &content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!(
            name = %parsed.name,
            residues = parsed.coords.len(),
            "Coordinates loaded from {:?}.",
            path
        );
        Ok(parsed)
    }

    pub fn parse(
        name: impl Into<String>,
        content: &str,
    ) -> std::result::Result<Self, CoordinateParseError> {
        let mut rows = Vec::new();
        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<f64>()
                        .map_err(|_| CoordinateParseError::InvalidNumber {
                            line: index + 1,
                            token: token.to_string(),
                        })
                })
                .collect::<std::result::Result<Vec<f64>, _>>()?;
            if row.len() != 3 {
                return Err(CoordinateParseError::WrongFieldCount {
                    line: index + 1,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(CoordinateParseError::Empty);
        }

        Ok(Self {
            name: name.into(),
            coords: geometry::points_from_rows(&rows)?,
        })
    }
}

impl CoordinateProvider for TextCoordinates {
    fn name(&self) -> &str {
        &self.name
    }

    fn coords(&self) -> &[Point3<f64>] {
        &self.coords
    }
}
