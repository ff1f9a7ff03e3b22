use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{Database, DEFAULT_LIMIT};

use super::print_json;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest: i32,

    /// Maximum number of stays to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

pub async fn run_reservations(db: &Database, args: ReservationsArgs) -> Result<()> {
    let stays = db
        .reservations()
        .list_for_guest(args.guest, args.limit)
        .await
        .with_context(|| format!("Failed to list reservations for guest {}", args.guest))?;
    print_json(&stays)
}
