//! Reservation repository
//!
//! Read-only: reservations are joined to their property and the property's
//! reviews in a single query.

use sqlx::PgPool;

use crate::error::Result;
use crate::models::ReservationStay;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's stays, earliest start date first.
    pub async fn list_for_guest(&self, guest_id: i32, limit: u32) -> Result<Vec<ReservationStay>> {
        let stays = sqlx::query_as::<_, ReservationStay>(
            r#"
            SELECT
                properties.*,
                reservations.start_date,
                reservations.end_date,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.start_date, reservations.end_date
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await
        .inspect_err(|e| tracing::error!("list reservations for guest {} failed: {}", guest_id, e))?;

        tracing::debug!("Guest {} has {} stays", guest_id, stays.len());
        Ok(stays)
    }
}
