use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AugmentAppConfig, SimulateAppConfig};
use crate::cli::{AugmentArgs, SimulateArgs};
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use std::path::{Path, PathBuf};
use strandsim::engine::config::{AugmentConfig, SimulationConfigBuilder};
use tracing::debug;

pub fn build_simulate_config(args: &SimulateArgs) -> Result<SimulateAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref(), &args.set_values)?;

    let tables_file = file_config.tables.take().unwrap_or_default();
    let sim_file = file_config.simulation.take().unwrap_or_default();

    let exposed_table_path = resolve_table_path(
        args.exposed_table.as_deref(),
        tables_file.exposed_path.as_deref(),
        defaults.exposed_table,
    )?;
    let buried_table_path = resolve_table_path(
        args.buried_table.as_deref(),
        tables_file.buried_path.as_deref(),
        defaults.buried_table,
    )?;

    let core_config = SimulationConfigBuilder::new()
        .exposed_table_path(exposed_table_path)
        .buried_table_path(buried_table_path)
        .frequency(
            args.frequency
                .or(sim_file.frequency)
                .unwrap_or(defaults.frequency),
        )
        .copies_per_sequence(
            args.copies_per_sequence
                .or(sim_file.copies_per_sequence)
                .unwrap_or(defaults.copies_per_sequence),
        )
        .interleave_threshold(
            args.interleave_threshold
                .or(sim_file.interleave_threshold)
                .unwrap_or(defaults.interleave_threshold),
        )
        .seed(args.seed.or(sim_file.seed).unwrap_or(defaults.seed))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(SimulateAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

pub fn build_augment_config(args: &AugmentArgs) -> Result<AugmentAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref(), &args.set_values)?;
    let augment_file = file_config.augment.take().unwrap_or_default();

    let skip_mutated = match (
        args.mutated_rows.include_mutated,
        args.mutated_rows.skip_mutated,
    ) {
        (true, false) => false,
        (false, true) => true,
        _ => augment_file.skip_mutated.unwrap_or(defaults.skip_mutated),
    };

    let core_config = AugmentConfig {
        min_identity: args
            .min_identity
            .or(augment_file.min_identity)
            .unwrap_or(defaults.min_identity),
        skip_mutated,
    };
    core_config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AugmentAppConfig {
        input_path: args.input.clone(),
        hits_path: args.hits.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

fn load_file_config(path: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = match path {
        Some(config_path) => FileConfig::from_file(config_path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, set_values)
}

fn resolve_table_path(
    cli_arg: Option<&Path>,
    file_arg: Option<&Path>,
    default_arg: &str,
) -> Result<PathBuf> {
    let path = cli_arg
        .or(file_arg)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_arg));

    if !path.exists() {
        return Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Substitution table does not exist: {}", path.display()),
        )));
    }
    debug!("Using substitution table {:?}", path);
    Ok(path)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) = parser::parse_key_value(kv_pair)
            .map_err(|e| CliError::Argument(e.to_string()))?;

        match key {
            "tables.exposed-path" => {
                config.tables.get_or_insert_with(Default::default).exposed_path =
                    Some(PathBuf::from(value));
            }
            "tables.buried-path" => {
                config.tables.get_or_insert_with(Default::default).buried_path =
                    Some(PathBuf::from(value));
            }
            "simulation.frequency" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .frequency =
                    Some(parser::parse_value(key, value, "float").map_err(config_error)?);
            }
            "simulation.copies-per-sequence" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .copies_per_sequence =
                    Some(parser::parse_value(key, value, "integer").map_err(config_error)?);
            }
            "simulation.interleave-threshold" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .interleave_threshold =
                    Some(parser::parse_value(key, value, "integer").map_err(config_error)?);
            }
            "simulation.seed" => {
                config.simulation.get_or_insert_with(Default::default).seed =
                    Some(parser::parse_value(key, value, "integer").map_err(config_error)?);
            }
            "augment.min-identity" => {
                config
                    .augment
                    .get_or_insert_with(Default::default)
                    .min_identity =
                    Some(parser::parse_value(key, value, "float").map_err(config_error)?);
            }
            "augment.skip-mutated" => {
                config
                    .augment
                    .get_or_insert_with(Default::default)
                    .skip_mutated =
                    Some(parser::parse_value(key, value, "boolean").map_err(config_error)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn config_error(e: ParseError) -> CliError {
    CliError::Config(e.to_string())
}
