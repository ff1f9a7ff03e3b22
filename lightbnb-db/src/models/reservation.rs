//! Reservation listing rows

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// A guest's stay: the reserved property, its dates and average rating
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationStay {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: f64,
}

