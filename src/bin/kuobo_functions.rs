//! Command-line driver for the Kuobo chat functions.
//!
//! Prints function schemas and call results as JSON on stdout. All tracing
//! output goes to stderr so stdout stays machine-readable.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kuobo::{FunctionOutput, FunctionRegistry, FunctionsConfig, function_specs};
use kuobo_search::{BingClient, PodcastRanker};
use tracing_subscriber::EnvFilter;

/// Run the web search and podcast search functions from the command line.
#[derive(Parser)]
#[command(name = "kuobo-functions", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Print the function descriptors for the model.
    Specs,

    /// Call a function by name with a JSON arguments object.
    Call {
        /// Function name, e.g. `search_podcasts`.
        name: String,
        /// Arguments object, e.g. `{"query": "自动驾驶"}`.
        args: String,
    },

    /// Search the web.
    Bing {
        /// Search query.
        query: String,
        /// Market code, e.g. `en-US`.
        #[arg(long)]
        mkt: Option<String>,
    },

    /// Search the podcast archive.
    Podcasts {
        /// Search query.
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(config = ?cli.config, "kuobo-functions starting");
    let config = FunctionsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Specs => {
            println!("{}", serde_json::to_string_pretty(&function_specs())?);
        }
        Command::Call { name, args } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("arguments must be a JSON object")?;
            let registry = FunctionRegistry::from_config(&config)?;
            let output = registry.call(&name, args).await?;
            println!("{}", output.to_json_text()?);
        }
        Command::Bing { query, mkt } => {
            let client = BingClient::new(config.bing.to_bing_config()?)?;
            let hits = client.search(&query, mkt.as_deref()).await?;
            println!("{}", FunctionOutput::SearchHits(hits).to_json_text()?);
        }
        Command::Podcasts { query } => {
            let ranker = PodcastRanker::new(config.podcast)?;
            let entries = ranker.search(&query).await?;
            println!("{}", FunctionOutput::Podcasts(entries).to_json_text()?);
        }
    }

    Ok(())
}
