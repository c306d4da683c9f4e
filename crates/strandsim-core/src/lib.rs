//! # strandsim
//!
//! Beta-strand aware alignment tooling: models alignments annotated with paired beta-strand
//! segments, simulates sequence evolution that respects the structural pairing, and projects
//! external pairwise search hits back onto the alignment's gapped coordinates.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Data models (`Alignment`, `BetaSet`, `BetaPair`,
//!   `AlignedSequence`), the residue alphabet and file I/O for the annotated Stockholm
//!   format, tabular search hits and FASTA.
//!
//! - **[`engine`]: The Logic Core.** Exposure-conditioned substitution tables, seeded
//!   sampling, the compensatory row-mutation rule and hit reconciliation.
//!
//! - **[`workflows`]: The Public API.** Complete file-to-file procedures such as
//!   [`workflows::simulate::run`] and [`workflows::augment::run`].

pub mod core;
pub mod engine;
pub mod workflows;
