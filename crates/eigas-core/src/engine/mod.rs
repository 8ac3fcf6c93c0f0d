//! # Engine Module
//!
//! This module implements fingerprint alignment for EIGAs, turning two per-residue
//! fingerprints into a residue correspondence and a score.
//!
//! ## Overview
//!
//! Both alignment flavours run a dynamic program over an `(N + 1) x (M + 1)` matrix whose
//! cells live in a flat arena and point at their predecessor by index. The global variant
//! minimizes substitution plus gap cost over the full sequences; the local variant
//! accumulates a similarity score floored at zero and reports every disjoint high-scoring
//! segment.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Cutoff, gap penalty, and alignment mode with validation
//! - **Global Alignment** ([`global`]) - Needleman-Wunsch style minimization
//! - **Local Alignment** ([`local`]) - Smith-Waterman style multi-segment extraction
//! - **Results** ([`result`]) - Alignment paths and ordered segment sets
//! - **Metrics** ([`metrics`]) - Aligned-residue counts, path costs, and normalized scores
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Limits
//!
//! Every alignment allocates and fills the whole matrix, so time and memory grow as
//! `O(N * M)`. Proteins of a few thousand residues are the practical ceiling.

pub mod config;
pub mod error;
pub mod global;
pub mod local;
pub(crate) mod matrix;
pub mod metrics;
pub mod progress;
pub mod result;
