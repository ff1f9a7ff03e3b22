//! Property records and insert payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{require_non_empty, require_non_negative, ValidationError};

/// Property record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property joined with the average of its review ratings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyWithRating {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

/// Insert payload: every property column except the generated id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_negative("cost_per_night", self.cost_per_night)?;
        require_non_negative("parking_spaces", self.parking_spaces)?;
        require_non_negative("number_of_bathrooms", self.number_of_bathrooms)?;
        require_non_negative("number_of_bedrooms", self.number_of_bedrooms)?;
        Ok(())
    }
}
