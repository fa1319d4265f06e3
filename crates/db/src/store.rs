//! The storage handle shared by every request.
//!
//! Handlers talk to [`TimerLogStore`] rather than to a pool directly so the
//! HTTP layer can be exercised against other backends.

use async_trait::async_trait;

use crate::models::timer_log::{NewTimerLog, TimerLog};
use crate::repositories::TimerLogRepo;
use crate::DbPool;

/// Read/write access to persisted timer logs.
#[async_trait]
pub trait TimerLogStore: Send + Sync {
    /// Insert one row and return it with storage-assigned fields populated.
    async fn insert(&self, dto: &NewTimerLog) -> Result<TimerLog, sqlx::Error>;

    /// Up to `limit` rows ordered by `created_at` descending.
    async fn list_recent(&self, limit: i64) -> Result<Vec<TimerLog>, sqlx::Error>;

    /// Check that storage is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// [`TimerLogStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgTimerLogStore {
    pool: DbPool,
}

impl PgTimerLogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl TimerLogStore for PgTimerLogStore {
    async fn insert(&self, dto: &NewTimerLog) -> Result<TimerLog, sqlx::Error> {
        TimerLogRepo::create(&self.pool, dto).await
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<TimerLog>, sqlx::Error> {
        TimerLogRepo::list_recent(&self.pool, limit).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
