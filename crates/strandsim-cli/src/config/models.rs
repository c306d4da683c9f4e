use std::path::PathBuf;
use strandsim::engine::config::{AugmentConfig, SimulationConfig};

pub struct SimulateAppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: SimulationConfig,
}

pub struct AugmentAppConfig {
    pub input_path: PathBuf,
    pub hits_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: AugmentConfig,
}
