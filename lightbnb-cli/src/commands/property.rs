//! Property command - insert listings from JSON documents

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{Database, NewProperty};

use super::print_json;

#[derive(Parser, Debug)]
pub struct PropertyArgs {
    #[command(subcommand)]
    pub command: PropertyCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommand {
    /// Insert a property described by a JSON file with all fourteen fields
    Create {
        /// Path to the property JSON document
        file: PathBuf,
    },
}

pub async fn run_property(db: &Database, args: PropertyArgs) -> Result<()> {
    match args.command {
        PropertyCommand::Create { file } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let property: NewProperty = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid property document {}", file.display()))?;

            let rows = db
                .properties()
                .create(&property)
                .await
                .context("Failed to create property")?;
            print_json(&rows)
        }
    }
}
