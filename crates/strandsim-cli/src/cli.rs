use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "strandsim - Analyze beta-annotated alignments and simulate structure-aware sequence evolution.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every strand pair of an alignment together with its interleave count.
    Interleave(InterleaveArgs),
    /// Drop strand pairs whose interleave exceeds a threshold.
    Simplify(SimplifyArgs),
    /// Append mutated replicas of every row, mutating the partners of paired columns.
    Simulate(SimulateArgs),
    /// Reconcile external search hits into new alignment rows.
    Augment(AugmentArgs),
    /// Export the ungapped original rows as FASTA search queries.
    Queries(QueriesArgs),
}

/// Arguments for the `interleave` subcommand.
#[derive(Args, Debug)]
pub struct InterleaveArgs {
    /// Path to the beta-annotated alignment file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `simplify` subcommand.
#[derive(Args, Debug)]
pub struct SimplifyArgs {
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Keep only strand pairs with an interleave at or below this value.
    #[arg(short, long, required = true, value_name = "INT")]
    pub threshold: usize,
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    // --- Core Arguments ---
    /// Path to the beta-annotated alignment file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the alignment with the simulated rows appended.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Table Overrides ---
    /// Substitution probabilities for exposed positions.
    #[arg(long, value_name = "PATH")]
    pub exposed_table: Option<PathBuf>,

    /// Substitution probabilities for buried positions.
    #[arg(long, value_name = "PATH")]
    pub buried_table: Option<PathBuf>,

    // --- Simulation Overrides ---
    /// Fraction of the mutable columns sampled per replica, between 0.0 and 1.0.
    #[arg(short, long, value_name = "FLOAT")]
    pub frequency: Option<f64>,

    /// Number of replicas generated for every row.
    #[arg(short = 'n', long = "copies", value_name = "INT")]
    pub copies_per_sequence: Option<usize>,

    /// Only mutate columns of strand pairs with at least this interleave.
    #[arg(short = 't', long = "threshold", value_name = "INT")]
    pub interleave_threshold: Option<usize>,

    /// Seed of the random generator.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S simulation.frequency=0.2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `augment` subcommand.
#[derive(Args, Debug)]
pub struct AugmentArgs {
    /// Path to the beta-annotated alignment file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the alignment with the reconciled hits appended.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Comma-separated search output: qseqid sseqid qseq sseq pident qstart qend sstart send.
    #[arg(long, required = true, value_name = "PATH")]
    pub hits: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Drop hits below this percent identity.
    #[arg(long, value_name = "FLOAT")]
    pub min_identity: Option<f64>,

    /// Override `augment.skip-mutated` from the config file.
    #[command(flatten)]
    pub mutated_rows: MutatedRows,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S augment.min-identity=60
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// A group to handle mutually exclusive flags for searching simulated rows.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct MutatedRows {
    /// Also reconcile hits of simulated `m_<n>_` rows.
    #[arg(long)]
    pub include_mutated: bool,
    /// Ignore hits of simulated `m_<n>_` rows.
    #[arg(long)]
    pub skip_mutated: bool,
}

/// Arguments for the `queries` subcommand.
#[derive(Args, Debug)]
pub struct QueriesArgs {
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the FASTA file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
