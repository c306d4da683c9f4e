use crate::cli::InterleaveArgs;
use crate::error::Result;
use strandsim::workflows;
use tracing::info;

pub fn run(args: InterleaveArgs) -> Result<()> {
    info!("Computing interleave for {:?}", &args.input);
    let lines = workflows::interleave::run(&args.input)?;

    for line in &lines {
        println!("{}", line);
    }
    info!("Reported {} strand pair(s).", lines.len());
    Ok(())
}
