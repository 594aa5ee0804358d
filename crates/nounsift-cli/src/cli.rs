//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nounsift - Noun phrases, keywords and similarity from morphological analysis.
#[derive(Debug, Parser)]
#[command(name = "nounsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NOUNSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// MeCab option string, overriding the configured analyzer (e.g. "-d /path/to/dic")
    #[arg(long, global = true)]
    pub mecab_args: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Plain format (one value per line)
    Plain,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Plain => OutputFormat::Plain,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the morphemes the analyzer produces
    Parse(TextArgs),

    /// Extract noun phrases
    Nouns(TextArgs),

    /// Extract keywords
    Keywords(KeywordsArgs),

    /// Count noun phrases, most frequent first
    Counts(TextArgs),

    /// Score the noun overlap of two texts
    Similarity(SimilarityArgs),
}

/// Arguments for commands working on one text.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Input text (read from stdin when omitted)
    pub text: Option<String>,
}

/// Arguments for the keywords command.
#[derive(Debug, Parser)]
pub struct KeywordsArgs {
    /// Input text (read from stdin when omitted)
    pub text: Option<String>,

    /// Maximum number of keywords (defaults to the configured count)
    #[arg(short, long)]
    pub n: Option<usize>,
}

/// Arguments for the similarity command.
#[derive(Debug, Parser)]
pub struct SimilarityArgs {
    /// First text
    pub text_a: String,

    /// Second text
    pub text_b: String,

    /// Report the normalized Dice coefficient instead of the weighted overlap
    #[arg(long)]
    pub normalized: bool,
}
