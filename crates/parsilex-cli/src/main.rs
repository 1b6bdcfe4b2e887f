//! Command line front end for the parsilex lexicon.

mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parsilex_core::Settings;
use parsilex_lexicon::{DataSource, Lexicon, SearchConfig};

#[derive(Debug, Parser)]
#[command(name = "parsilex")]
#[command(about = "Persian word frequency and affect lookup")]
struct Cli {
    /// Frequency dataset path or URL (overrides PARSILEX_FREQUENCY_SOURCE)
    #[arg(long, global = true)]
    frequency: Option<String>,

    /// Affect dataset path or URL (overrides PARSILEX_AFFECT_SOURCE)
    #[arg(long, global = true)]
    affect: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a single word to its frequency and affect records
    Resolve {
        word: String,

        /// Emit the entry as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Search the vocabulary, ranked exact > prefix > substring
    Search {
        query: String,

        /// Cap the number of results (defaults to PARSILEX_RESULT_CAP)
        #[arg(long)]
        limit: Option<usize>,

        /// Emit results as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Resolve a newline-separated word list in input order
    Batch {
        /// Path to the word list, one word per line
        path: PathBuf,

        /// Emit results as CSV with a header row
        #[arg(long, conflicts_with = "json")]
        csv: bool,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse arguments before touching the environment so --help and
    // --version work even when a settings variable holds garbage.
    let cli = Cli::parse();

    let settings = parsilex_core::load_settings()?;
    init_tracing(&settings.log_level);

    let lexicon = load_lexicon(&cli, &settings)
        .await
        .context("reference data unavailable")?;

    match cli.command {
        Commands::Resolve { word, json } => {
            let entry = lexicon.resolve(&word);
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                output::print_entry(&entry);
            }
        }
        Commands::Search { query, limit, json } => {
            let config = SearchConfig {
                result_cap: limit.unwrap_or(settings.result_cap),
            };
            let results = lexicon.search(&query, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_entries(&results);
            }
        }
        Commands::Batch { path, csv, json } => {
            let words = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            let entries = lexicon.resolve_batch(words.lines());
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if csv {
                print!("{}", output::to_csv(&entries));
            } else {
                output::print_entries(&entries);
            }
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn load_lexicon(cli: &Cli, settings: &Settings) -> anyhow::Result<Lexicon> {
    let frequency = cli
        .frequency
        .as_deref()
        .or(settings.frequency_source.as_deref())
        .context("no frequency source: pass --frequency or set PARSILEX_FREQUENCY_SOURCE")?;
    let affect = cli
        .affect
        .as_deref()
        .or(settings.affect_source.as_deref())
        .context("no affect source: pass --affect or set PARSILEX_AFFECT_SOURCE")?;

    let lexicon = Lexicon::load_with_options(
        &DataSource::from(frequency),
        &DataSource::from(affect),
        settings.expand_options(),
    )
    .await?;
    Ok(lexicon)
}

#[cfg(test)]
mod tests;
