//! nounsift CLI - noun phrases, keywords and similarity from the command line.

use clap::Parser;
use nounsift_analyzer::{MecabAnalyzer, MecabConfig};
use nounsift_cli::commands;
use nounsift_cli::config::OutputFormat;
use nounsift_cli::{Cli, Command, Config, Formatter};
use nounsift_extractor::Extractor;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Errors can happen before the config is read, so only the flag decides color.
    let errors = Formatter::new(OutputFormat::Plain, !cli.no_color);

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", errors.error(&e.to_string()));
            std::process::exit(1);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> nounsift_cli::Result<String> {
    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Override analyzer options if specified
    if let Some(args) = &cli.mecab_args {
        let program = config.analyzer.program.clone();
        config.analyzer = MecabConfig {
            program,
            ..MecabConfig::from_arg_string(args)?
        };
    }

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let analyzer = MecabAnalyzer::new(config.analyzer)?;
    debug!("Using analyzer version '{}'", analyzer.version());
    let extractor = Extractor::new(analyzer, config.extractor)?;

    match cli.command {
        Command::Parse(args) => commands::execute_parse(args, &extractor, &formatter).await,
        Command::Nouns(args) => commands::execute_nouns(args, &extractor, &formatter).await,
        Command::Keywords(args) => commands::execute_keywords(args, &extractor, &formatter).await,
        Command::Counts(args) => commands::execute_counts(args, &extractor, &formatter).await,
        Command::Similarity(args) => {
            commands::execute_similarity(args, &extractor, &formatter).await
        }
    }
}
