use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "dicewords",
    version,
    about = "dicewords CLI - Finds the dictionary words a set of letter dice can spell and writes the word-selection problem as a binary integer program.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE,
    /// -vvvv to also trace every anagram key hit of the word search)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an anagram dictionary from a word list and save it as JSON.
    Index(IndexArgs),
    /// Enumerate the words spelled by a die set and write the selection model.
    Build(BuildArgs),
}

/// Arguments for the `index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Path to the word list, one word per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub corpus: PathBuf,

    /// Path for the JSON anagram dictionary.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    // --- Core Arguments ---
    #[command(flatten)]
    pub dice: DiceSourceArgs,

    /// Path to the anagram dictionary (`.json`) or a plain word list.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub lexicon: PathBuf,

    /// Path for the model in CPLEX LP format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Enumeration Overrides ---
    /// Override the longest word the search will build.
    #[arg(long, value_name = "INT")]
    pub max_word_length: Option<usize>,

    /// Override the wall-clock budget of the word search, in seconds.
    #[arg(long, value_name = "SECS", value_parser = parser::parse_seconds)]
    pub time_budget: Option<Duration>,

    // --- Model Overrides ---
    /// Override `model.objective-sense` from the config file.
    #[command(flatten)]
    pub objective_sense: ObjectiveSenseFlags,

    /// Override how often a single die face may be used across the selected words.
    #[arg(long, value_name = "INT")]
    pub face_capacity: Option<u32>,

    /// Print every candidate word with its dice and points.
    #[arg(long)]
    pub list: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S model.face-capacity=6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Where the dice come from: a CSV file or one of the built-in sample sets.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct DiceSourceArgs {
    /// Path to a CSV dice file, one die per row and one face per field.
    #[arg(short, long, value_name = "PATH")]
    pub dice: Option<PathBuf>,

    /// Name of a built-in sample die set (small, medium, four-by-six, classic).
    #[arg(long, value_name = "NAME", value_parser = parser::parse_sample_name)]
    pub sample: Option<&'static str>,
}

/// A group to handle mutually exclusive flags for the objective sense.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct ObjectiveSenseFlags {
    /// Emit a maximization objective over the word scores.
    #[arg(long)]
    pub maximize: bool,
    /// Emit a minimization objective over the negated word scores.
    #[arg(long)]
    pub minimize: bool,
}
