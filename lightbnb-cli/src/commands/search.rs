use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{Database, SearchOptions, DEFAULT_LIMIT};

use super::print_json;

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// City substring (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Owner user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Nightly cost must be above this
    #[arg(long)]
    pub min_price: Option<i32>,

    /// Nightly cost must be below this
    #[arg(long)]
    pub max_price: Option<i32>,

    /// Minimum average review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum number of properties to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl From<&SearchArgs> for SearchOptions {
    fn from(args: &SearchArgs) -> Self {
        Self {
            city: args.city.clone(),
            owner_id: args.owner_id,
            minimum_price_per_night: args.min_price,
            maximum_price_per_night: args.max_price,
            minimum_rating: args.min_rating,
        }
    }
}

pub async fn run_search(db: &Database, args: SearchArgs) -> Result<()> {
    let options = SearchOptions::from(&args);
    let rows = db
        .properties()
        .search(&options, args.limit)
        .await
        .context("Property search failed")?;
    print_json(&rows)
}
