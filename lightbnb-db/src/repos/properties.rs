//! Property repository
//!
//! - search: dynamic filters rendered by [`PropertySearch`]
//! - create: fourteen positional fields, rows returned as the store gives them

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{NewProperty, Property, PropertyWithRating};
use crate::search::{PropertySearch, SearchOptions};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search reviewed properties, cheapest first.
    ///
    /// Failures propagate to the caller without being logged here.
    pub async fn search(
        &self,
        options: &SearchOptions,
        limit: u32,
    ) -> Result<Vec<PropertyWithRating>> {
        let search = PropertySearch::new(options, limit);
        let mut qb = search.build();
        tracing::debug!(sql = qb.sql(), "property search");

        let rows = qb
            .build_query_as::<PropertyWithRating>()
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Insert a property and return the inserted row(s).
    pub async fn create(&self, property: &NewProperty) -> Result<Vec<Property>> {
        property.validate()?;

        let rows = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_all(self.pool)
        .await
        .inspect_err(|e| tracing::error!("create property failed: {}", e))?;

        Ok(rows)
    }
}
