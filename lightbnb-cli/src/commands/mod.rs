//! Command implementations for the lightbnb CLI

pub mod migrate;
pub mod property;
pub mod reservations;
pub mod search;
pub mod user;

pub use migrate::run_migrate;
pub use property::run_property;
pub use reservations::run_reservations;
pub use search::run_search;
pub use user::run_user;

use anyhow::Result;
use serde::Serialize;

/// Print a result as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
