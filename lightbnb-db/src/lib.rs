//! lightbnb-db: data-access layer for the LightBnB rental application
//!
//! Parameterized queries over users, properties, reservations and property
//! reviews, executed against a shared PostgreSQL pool.
//!
//! ```ignore
//! let db = Database::connect(&DbConfig::load()).await?;
//! let user = db.users().find_by_email("Ada@Example.com").await?;
//! let rows = db
//!     .properties()
//!     .search(&SearchOptions { city: Some("Rome".into()), ..Default::default() }, 5)
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repos;
pub mod search;
pub mod state;

pub use config::{DbConfig, DbConfigLayer};
pub use error::{DbError, Result};
pub use models::{
    NewProperty, NewUser, Property, PropertyWithRating, ReservationStay, User, ValidationError,
};
pub use pool::{connect, create_pool};
pub use repos::{LookupExt, PropertyRepo, ReservationRepo, UserRepo};
pub use search::{Predicate, PropertySearch, SearchOptions, DEFAULT_LIMIT};
pub use state::Database;
