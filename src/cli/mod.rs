//! Command-line interface definitions.

pub mod check;
pub mod generate;
pub mod output;
pub mod sample;
pub mod suggest;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::Market;
use crate::sample::Region;
use crate::error::Result;

/// Slipgen - randomized match-outcome slips with accumulator payouts.
#[derive(Parser, Debug)]
#[command(name = "slipgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, global = true, default_value = "slipgen.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and value slips for a match list
    Generate(GenerateArgs),

    /// Show the suggested slip count for a match list
    Suggest(MatchesArg),

    /// Print a random demo match list
    Sample(SampleArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

impl Cli {
    /// Load the config file (defaults when missing) with global log overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(&self.config)?;
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = "json".into();
        }
        Ok(config)
    }
}

/// Subcommands for `slipgen check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Output format for generated slips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// Shared argument for commands that read a match list.
#[derive(Args, Debug)]
pub struct MatchesArg {
    /// Match list file, one match per line ("-" or absent reads stdin)
    #[arg(short, long)]
    pub matches: Option<PathBuf>,
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of fixtures
    #[arg(short = 'n', long, default_value = "15")]
    pub count: usize,

    /// Team pool (all, epl, laliga, africa, usa, rest)
    #[arg(short, long, default_value = "all")]
    pub region: Region,

    /// Seed for a reproducible list
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: MatchesArg,

    /// Market to generate (1x2, goals, correct_score)
    #[arg(long)]
    pub market: Option<Market>,

    /// Number of slips (defaults to 3^matches, capped)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Home win weight
    #[arg(long)]
    pub home: Option<f64>,

    /// Draw weight
    #[arg(long)]
    pub draw: Option<f64>,

    /// Away win weight
    #[arg(long)]
    pub away: Option<f64>,

    /// Over 2.5 weight
    #[arg(long)]
    pub over: Option<f64>,

    /// Under 2.5 weight
    #[arg(long)]
    pub under: Option<f64>,

    /// Longest allowed run of the same outcome
    #[arg(long)]
    pub max_consecutive: Option<u32>,

    /// Goal bound for correct-score coverage
    #[arg(long)]
    pub max_goals: Option<u32>,

    /// Flat stake per slip
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Maximum slips to print in table format (all are generated)
    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

/// Read the match list from a file, or stdin for `None`/`-`.
pub fn read_match_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
