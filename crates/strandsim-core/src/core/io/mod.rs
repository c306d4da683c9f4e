//! Readers and writers for the file formats the workflows consume and produce.
//!
//! The beta-annotated alignment format goes through the [`traits::AlignmentFile`]
//! interface; search hits and FASTA queries are simple one-way formats with free functions.

pub mod fasta;
pub mod hits;
pub mod stockholm;
pub mod traits;
