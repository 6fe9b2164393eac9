//! Tagline — command-line entry point.

mod config;
mod enrich;
mod example;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagline")]
#[command(about = "Enrich contact records with interest tags and descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a CSV export row by row
    Enrich {
        /// Input CSV path
        #[arg(long)]
        input: PathBuf,
        /// Output CSV path
        #[arg(long)]
        output: PathBuf,
        /// Override the configured strategy (manual|llm)
        #[arg(long)]
        strategy: Option<String>,
    },
    /// Enrich a single profile JSON and print the result
    Profile {
        /// Profile JSON file; uses a built-in example when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Override the configured strategy (manual|llm)
        #[arg(long)]
        strategy: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let app_config = AppConfig::from_env().context("resolve configuration")?;

    match cli.command {
        Commands::Enrich {
            input,
            output,
            strategy,
        } => {
            let strategy = app_config.strategy(strategy.as_deref())?;
            let source = app_config.source()?;
            enrich::run(&input, &output, &source, &strategy).await?;
        }
        Commands::Profile { file, strategy } => {
            let strategy = app_config.strategy(strategy.as_deref())?;
            let raw_profile = match file {
                Some(path) => {
                    let contents = std::fs::read_to_string(&path)
                        .with_context(|| format!("read profile file {}", path.display()))?;
                    serde_json::from_str(&contents)
                        .with_context(|| format!("parse profile JSON in {}", path.display()))?
                }
                None => example::example_profile(),
            };
            let enrichment = tl_pipeline::process_profile(&raw_profile, &strategy).await?;
            println!("{}", serde_json::to_string_pretty(&enrichment)?);
        }
    }

    Ok(())
}
