use std::path::PathBuf;
use thiserror::Error;

/// Seed used when a run does not specify one.
pub const DEFAULT_SEED: u64 = 1;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Where the exposure-conditioned substitution tables live.
#[derive(Debug, Clone, PartialEq)]
pub struct TablesConfig {
    pub exposed_table_path: PathBuf,
    pub buried_table_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub frequency: f64,
    pub copies_per_sequence: usize,
    pub interleave_threshold: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub tables: TablesConfig,
    pub params: SimulationParams,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    exposed_table_path: Option<PathBuf>,
    buried_table_path: Option<PathBuf>,
    frequency: Option<f64>,
    copies_per_sequence: Option<usize>,
    interleave_threshold: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exposed_table_path(mut self, path: PathBuf) -> Self {
        self.exposed_table_path = Some(path);
        self
    }
    pub fn buried_table_path(mut self, path: PathBuf) -> Self {
        self.buried_table_path = Some(path);
        self
    }
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }
    pub fn copies_per_sequence(mut self, copies: usize) -> Self {
        self.copies_per_sequence = Some(copies);
        self
    }
    pub fn interleave_threshold(mut self, threshold: usize) -> Self {
        self.interleave_threshold = Some(threshold);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let frequency = self
            .frequency
            .ok_or(ConfigError::MissingParameter("frequency"))?;
        if !(0.0..=1.0).contains(&frequency) {
            return Err(ConfigError::InvalidParameter {
                name: "frequency",
                reason: format!("{} must be between 0.0 and 1.0", frequency),
            });
        }

        Ok(SimulationConfig {
            tables: TablesConfig {
                exposed_table_path: self
                    .exposed_table_path
                    .ok_or(ConfigError::MissingParameter("exposed_table_path"))?,
                buried_table_path: self
                    .buried_table_path
                    .ok_or(ConfigError::MissingParameter("buried_table_path"))?,
            },
            params: SimulationParams {
                frequency,
                copies_per_sequence: self
                    .copies_per_sequence
                    .ok_or(ConfigError::MissingParameter("copies_per_sequence"))?,
                interleave_threshold: self.interleave_threshold.unwrap_or(0),
                seed: self.seed.unwrap_or(DEFAULT_SEED),
            },
        })
    }
}

/// Caller-side policy for which search hits are reconciled into an alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentConfig {
    /// Hits below this percent identity are dropped. Exact duplicates (100%) always are.
    pub min_identity: f64,
    /// Skip rows that are themselves simulated replicas (`m_<n>_...`).
    pub skip_mutated: bool,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            min_identity: 50.0,
            skip_mutated: true,
        }
    }
}

impl AugmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.min_identity) {
            return Err(ConfigError::InvalidParameter {
                name: "min_identity",
                reason: format!("{} must be a percentage", self.min_identity),
            });
        }
        Ok(())
    }
}
