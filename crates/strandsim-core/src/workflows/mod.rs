//! # Workflows Module
//!
//! End-to-end procedures over persisted alignment files. Each workflow loads its inputs,
//! drives the [`crate::engine`] and writes its result, reporting progress through a
//! [`crate::engine::progress::ProgressReporter`].
//!
//! - **Interleave report** ([`interleave`]) - One summary line per strand pair
//! - **Simplification** ([`simplify`]) - Drops strand pairs above an interleave threshold
//! - **Mutation simulation** ([`simulate`]) - Appends structure-aware mutated replicas
//! - **Query export** ([`queries`]) - Ungapped FASTA input for an external sequence search
//! - **Augmentation** ([`augment`]) - Reconciles external search hits into new rows

pub mod augment;
pub mod interleave;
pub mod queries;
pub mod simplify;
pub mod simulate;
