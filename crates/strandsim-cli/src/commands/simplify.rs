use crate::cli::SimplifyArgs;
use crate::error::Result;
use strandsim::workflows;
use tracing::info;

pub fn run(args: SimplifyArgs) -> Result<()> {
    info!(
        "Simplifying {:?} with interleave threshold {}",
        &args.input, args.threshold
    );
    let summary = workflows::simplify::run(&args.input, &args.output, args.threshold)?;

    println!(
        "✓ Kept {} of {} strand pair(s). Written to: {}",
        summary.pairs_after,
        summary.pairs_before,
        args.output.display()
    );
    Ok(())
}
