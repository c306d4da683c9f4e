//! # Models Module
//!
//! Data structures for beta-annotated alignments.
//!
//! - [`sequence`] - A single named, gapped alignment row
//! - [`beta_pair`] - One paired strand record with its derived pairing and exposure maps
//! - [`beta_set`] - All pairs of an alignment, aggregated column indices and interleave
//! - [`alignment`] - The container tying header metadata, rows and pairs together

pub mod alignment;
pub mod beta_pair;
pub mod beta_set;
pub mod sequence;
