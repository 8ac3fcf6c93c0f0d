use super::config::ConfigError;
use crate::core::protein::ProteinError;
use thiserror::Error;

/// Which input of a pairwise alignment an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSide {
    First,
    Second,
}

impl std::fmt::Display for SequenceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceSide::First => write!(f, "first"),
            SequenceSide::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("The {side} fingerprint is empty; alignment needs at least one residue per side")]
    EmptySequence { side: SequenceSide },
}

pub(crate) fn ensure_non_empty(
    fingerprint1: &[f64],
    fingerprint2: &[f64],
) -> Result<(), AlignmentError> {
    if fingerprint1.is_empty() {
        return Err(AlignmentError::EmptySequence {
            side: SequenceSide::First,
        });
    }
    if fingerprint2.is_empty() {
        return Err(AlignmentError::EmptySequence {
            side: SequenceSide::Second,
        });
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Protein(#[from] ProteinError),

    #[error("Alignment of '{protein1}' against '{protein2}' failed: {source}")]
    Alignment {
        protein1: String,
        protein2: String,
        #[source]
        source: AlignmentError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
