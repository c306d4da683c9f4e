//! # Engine Module
//!
//! The stochastic and coordinate-bookkeeping machinery that sits between the alignment
//! data model in [`crate::core`] and the end-to-end [`crate::workflows`].
//!
//! ## Architecture
//!
//! - **Substitution tables** ([`tables`]) - Exposure-conditioned probability matrices loaded
//!   once per run and passed by reference to every draw
//! - **Mutation** ([`mutation`]) - Residue sampling, mutation-site sampling and the
//!   compensatory row-mutation rule that writes at the partner column
//! - **Reconciliation** ([`reconcile`]) - Projection of an external pairwise hit onto the
//!   gapped columns of an alignment row
//! - **Configuration** ([`config`]) - Validated run parameters
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - The aggregated [`error::EngineError`]
//!
//! All random draws take an injected [`rand::Rng`], so a seeded generator reproduces a run
//! exactly.

pub mod config;
pub mod error;
pub mod mutation;
pub mod progress;
pub mod reconcile;
pub mod tables;
pub mod utils;
