//! # EIGAs Core Library
//!
//! Spectral fingerprints and dynamic-programming alignment for comparing protein
//! structures from their alpha-carbon traces.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Distance and contact matrices, the spectral fingerprint
//!   extractor, and the immutable `Protein` entity built from a coordinate provider.
//!
//! - **[`engine`]: The Alignment Core.** Global and local alignment over fingerprint
//!   sequences, alignment metrics, configuration, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Batch fingerprinting and all-pairs comparison,
//!   parallelized with rayon when the `parallel` feature is enabled.

pub mod core;
pub mod engine;
pub mod workflows;
