//! # Workflows Module
//!
//! High-level entry points that run the EIGAs pipeline over whole sets of proteins.
//!
//! ## Overview
//!
//! Workflows turn coordinate providers into fingerprinted [`Protein`](crate::core::protein::Protein)s
//! and compare every unordered pair with the alignment engine. Both stages report progress
//! through a [`ProgressReporter`](crate::engine::progress::ProgressReporter) and run on the
//! rayon thread pool when the `parallel` feature is enabled. Output order never depends on
//! scheduling.
//!
//! - **Fingerprinting** ([`fingerprint`]) - One protein per provider, input order preserved
//! - **Comparison** ([`compare`]) - Single-pair and all-pairs alignment summaries

pub mod compare;
pub mod fingerprint;
