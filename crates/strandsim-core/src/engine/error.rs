use thiserror::Error;

use super::config::ConfigError;
use super::tables::TableLoadError;
use super::utils::sampling::SamplingError;
use crate::core::io::hits::HitsError;
use crate::core::io::stockholm::StockholmError;
use crate::core::models::beta_set::PairingError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Alignment file error: {0}")]
    Alignment(#[from] StockholmError),

    #[error("Mutation table error: {0}")]
    Tables(#[from] TableLoadError),

    #[error("Search hit error: {0}")]
    Hits(#[from] HitsError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pairing(#[from] PairingError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error("Residue '{0}' is not one of the 20 canonical amino acids")]
    UnknownResidue(char),

    #[error("Column {0} is paired but no strand pair records its exposure")]
    MissingExposure(usize),

    #[error("Column {column} is outside a row of length {length}")]
    ColumnOutOfRange { column: usize, length: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
