//! # Core Module
//!
//! The stateless foundation of the library: the alignment data model, the file formats it
//! is read from and written to, and the symbol tables both rely on.
//!
//! ## Architecture
//!
//! - **Alignment Representation** ([`models`]) - Rows, strand pairs, pair sets and the
//!   alignment container
//! - **File I/O** ([`io`]) - The beta-annotated Stockholm format, tabular search hits and
//!   FASTA export
//! - **Symbols** ([`utils`]) - Gap symbols and the amino-acid alphabet
//!
//! Nothing in this module draws random numbers on its own; the only randomized lookup,
//! [`models::beta_set::BetaSet::paired_residue`], takes the generator from its caller.

pub mod io;
pub mod models;
pub mod utils;
