use crate::cli::QueriesArgs;
use crate::error::Result;
use strandsim::workflows;
use tracing::info;

pub fn run(args: QueriesArgs) -> Result<()> {
    info!("Exporting search queries from {:?}", &args.input);
    let written = workflows::queries::run(&args.input, &args.output)?;

    println!(
        "✓ Wrote {} query record(s) to: {}",
        written,
        args.output.display()
    );
    Ok(())
}
