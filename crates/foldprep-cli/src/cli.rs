use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Foldprep Developers",
    version,
    about = "Foldprep CLI - Prepares AlphaFold2, AlphaFold3 and ColabFold input files from job-cycle specifications of molecular entities.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate input files for the selected structure-prediction tool.
    Generate(GenerateArgs),
    /// Resolve and validate a specification without writing any files.
    Check(CheckArgs),
}

/// The target format family.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// AlphaFold3 JSON job files.
    Af3,
    /// AlphaFold2 FASTA files, one per job.
    Af2,
    /// ColabFold FASTA files with `:`-joined chains.
    Colabfold,
}

/// Input files shared by every subcommand.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to the YAML file declaring the target job cycles.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub targets: PathBuf,

    /// Path to the FASTA file containing the protein sequences.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub sequences: PathBuf,

    /// Path to the FASTA file containing DNA/RNA sequences.
    #[arg(short, long, value_name = "PATH")]
    pub nucleic_sequences: Option<PathBuf>,

    /// Path to a JSON file mapping entity display names to catalog identifiers.
    #[arg(short, long, value_name = "PATH")]
    pub aliases: Option<PathBuf>,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Target format family to generate input files for.
    #[arg(short, long, value_enum, default_value = "af3")]
    pub format: Format,

    /// Directory the job files are written to.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of AlphaFold3 jobs bundled into one JSON file (1-100).
    #[arg(short = 'j', long, value_name = "INT")]
    pub jobs_per_file: Option<usize>,

    /// Fix the random generator seed used for modelSeeds expansion.
    #[arg(long, value_name = "INT")]
    pub rng_seed: Option<u64>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}
