use anyhow::{Context, Result};
use lightbnb_db::{migrations, Database};

pub async fn run_migrate(db: &Database) -> Result<()> {
    migrations::run(db.pool())
        .await
        .context("Failed to provision LightBnB schema")?;
    eprintln!("Schema is up to date");
    Ok(())
}
