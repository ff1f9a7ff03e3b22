//! Domain models for the LightBnB schema
//!
//! Row types derive `sqlx::FromRow`; insert payloads validate themselves
//! before any SQL is issued.

mod property;
mod reservation;
mod user;
mod validation;

pub use property::{NewProperty, Property, PropertyWithRating};
pub use reservation::ReservationStay;
pub use user::{NewUser, User};
pub use validation::ValidationError;
