use crate::cli::AugmentArgs;
use crate::config::builder::build_augment_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use strandsim::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: AugmentArgs, progress_handler: &CliProgressHandler) -> Result<()> {
    let app_config = build_augment_config(&args)?;
    info!(
        min_identity = app_config.core_config.min_identity,
        skip_mutated = app_config.core_config.skip_mutated,
        "Augmenting {:?} with hits from {:?}",
        &app_config.input_path,
        &app_config.hits_path
    );

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let summary = workflows::augment::run(
        &app_config.input_path,
        &app_config.hits_path,
        &app_config.output_path,
        &app_config.core_config,
        &reporter,
    )?;

    if summary.hits_appended == 0 {
        warn!("No hit passed the identity filter.");
    }
    println!(
        "✓ Appended {} hit(s) ({} rejected, {} without a matching row). Written to: {}",
        summary.hits_appended,
        summary.hits_rejected,
        summary.hits_unmatched,
        app_config.output_path.display()
    );
    Ok(())
}
