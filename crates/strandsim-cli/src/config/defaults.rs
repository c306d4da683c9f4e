use strandsim::engine::config::DEFAULT_SEED;

pub struct DefaultsConfig {
    pub exposed_table: &'static str,
    pub buried_table: &'static str,
    pub frequency: f64,
    pub copies_per_sequence: usize,
    pub interleave_threshold: usize,
    pub seed: u64,
    pub min_identity: f64,
    pub skip_mutated: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            exposed_table: "ExposedProbability.csv",
            buried_table: "BuriedProbability.csv",
            frequency: 0.1,
            copies_per_sequence: 5,
            interleave_threshold: 0,
            seed: DEFAULT_SEED,
            min_identity: 50.0,
            skip_mutated: true,
        }
    }
}
