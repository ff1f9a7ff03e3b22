//! Process-wide database handle
//!
//! Created once at startup, cloned into whatever needs it, closed on shutdown.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::DbConfig;
use crate::error::Result;
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Shared database handle
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

struct DatabaseInner {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(DatabaseInner { pool }),
        }
    }

    /// Open the pool described by `config`.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = crate::pool::connect(config).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(self.pool())
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(self.pool())
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(self.pool())
    }

    /// Close every pooled connection. Pending acquires fail afterwards.
    pub async fn close(&self) {
        self.inner.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
