use crate::cli::SimulateArgs;
use crate::config::builder::build_simulate_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use strandsim::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: SimulateArgs, progress_handler: &CliProgressHandler) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_simulate_config(&args)?;
    let params = &app_config.core_config.params;
    info!(
        frequency = params.frequency,
        copies = params.copies_per_sequence,
        threshold = params.interleave_threshold,
        seed = params.seed,
        "Simulation configured."
    );

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let summary = workflows::simulate::run(
        &app_config.core_config,
        &app_config.input_path,
        &app_config.output_path,
        &reporter,
    )?;

    if summary.simulated_rows == 0 {
        warn!("No columns met the interleave threshold; the alignment was written unchanged.");
        println!("Warning: no mutable beta positions, no replicas were generated.");
    } else {
        println!(
            "✓ Appended {} replica(s) of {} row(s) over {} mutable column(s). Written to: {}",
            summary.simulated_rows,
            summary.original_rows,
            summary.mutable_columns,
            app_config.output_path.display()
        );
    }
    Ok(())
}
