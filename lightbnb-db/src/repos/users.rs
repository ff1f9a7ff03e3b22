//! User repository
//!
//! - find by email: case-insensitive exact match on LOWER(email)
//! - find by id: exact match
//! - create: INSERT ... RETURNING the full record

use sqlx::PgPool;

use crate::error::{DbError, Result};
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a user by email, ignoring case.
    ///
    /// `Ok(None)` means no row matched; query faults are logged and returned.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE LOWER(email) = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(self.pool)
        .await
        .inspect_err(|e| tracing::error!("find user by email failed: {}", e))
        .map_err(DbError::from)
    }

    /// Look up a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .inspect_err(|e| tracing::error!("find user {} failed: {}", id, e))
        .map_err(DbError::from)
    }

    /// Register a user, returning the stored record with its generated id.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        user.validate()?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .inspect_err(|e| tracing::error!("create user failed: {}", e))?;

        tracing::debug!("Created user {}", created.id);
        Ok(created)
    }
}
