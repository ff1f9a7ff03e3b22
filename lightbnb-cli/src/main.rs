//! lightbnb CLI - operator surface over the LightBnB data-access layer
//!
//! Provides:
//! - Schema provisioning (`migrate`)
//! - User lookup and registration (`user`)
//! - Guest reservation listing (`reservations`)
//! - Filtered property search (`search`)
//! - Property insertion from JSON documents (`property`)
//!
//! Results are printed as JSON on stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{Database, DbConfig};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and manage the LightBnB rental database"
)]
struct Cli {
    /// Enable debug logging (includes rendered search SQL)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the LightBnB tables if they don't exist
    Migrate,
    /// Look up or register users
    User(commands::user::UserArgs),
    /// List a guest's reservations, earliest first
    Reservations(commands::reservations::ReservationsArgs),
    /// Search reviewed properties, cheapest first
    Search(commands::search::SearchArgs),
    /// Insert properties
    Property(commands::property::PropertyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    config::load_dotenv();

    let db_config = DbConfig::load();
    let db = Database::connect(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}", db_config.describe()))?;

    let result = match cli.command {
        Commands::Migrate => commands::run_migrate(&db).await,
        Commands::User(args) => commands::run_user(&db, args).await,
        Commands::Reservations(args) => commands::run_reservations(&db, args).await,
        Commands::Search(args) => commands::run_search(&db, args).await,
        Commands::Property(args) => commands::run_property(&db, args).await,
    };

    db.close().await;
    result
}
