//! # Core Module
//!
//! Stateless building blocks that turn a backbone trace into an alignable fingerprint.
//!
//! - **Geometry** ([`geometry`]) - Pairwise distance matrices and cutoff-scaled contact matrices
//! - **Spectral Fingerprints** ([`spectral`]) - Singular value decomposition of the contact
//!   matrix and the per-residue dominant-mode assignment
//! - **Proteins** ([`protein`]) - The [`protein::CoordinateProvider`] contract and the immutable
//!   [`protein::Protein`] entity that owns a fingerprint

pub mod geometry;
pub mod protein;
pub mod spectral;
