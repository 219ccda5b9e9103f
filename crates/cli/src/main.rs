//! Vitrine CLI - catalog snapshots and translation catalog tooling.
//!
//! # Usage
//!
//! ```bash
//! # Snapshot the upstream catalog into ./data
//! vitrine fetch-data --out data
//!
//! # Add missing entries to the French message catalog
//! vitrine translations generate --data data --file locales/fr.json
//!
//! # Machine-translate entries that are still in English
//! vitrine translations translate --data data --file locales/fr.json
//! ```
//!
//! # Commands
//!
//! - `fetch-data` - Write categories, products, product details and a summary as JSON
//! - `translations generate` - Seed the message catalog from a snapshot
//! - `translations translate` - Fill the message catalog through `DeepL`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Snapshot the upstream catalog as JSON files
    FetchData {
        /// Output directory
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },
    /// Manage the French message catalog
    Translations {
        #[command(subcommand)]
        action: TranslationsAction,
    },
}

#[derive(Subcommand)]
enum TranslationsAction {
    /// Add catalog names and descriptions missing from the message catalog
    Generate {
        /// Directory written by `fetch-data`
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// Message catalog to update
        #[arg(short, long, default_value = "locales/fr.json")]
        file: PathBuf,
    },
    /// Translate entries whose value is still the English source (needs `DEEPL_API_KEY`)
    Translate {
        /// Directory written by `fetch-data`
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// Message catalog to update
        #[arg(short, long, default_value = "locales/fr.json")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::FetchData { out } => commands::fetch_data::run(&out).await?,
        Commands::Translations { action } => match action {
            TranslationsAction::Generate { data, file } => {
                commands::translations::generate(&data, &file)?;
            }
            TranslationsAction::Translate { data, file } => {
                commands::translations::translate(&data, &file).await?;
            }
        },
    }
    Ok(())
}
