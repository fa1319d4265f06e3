//! Repository for the `timer_logs` table.
//!
//! Rows are insert-only: there is no update or delete.

use sqlx::PgPool;

use crate::models::timer_log::{NewTimerLog, TimerLog};

/// Column list for `timer_logs` queries.
const COLUMNS: &str = "id, configured_minutes, executed_at, label, created_at";

/// Provides data access for timer logs.
pub struct TimerLogRepo;

impl TimerLogRepo {
    /// Insert a timer log and return the stored row.
    ///
    /// `id` and `created_at` are assigned by the database.
    pub async fn create(pool: &PgPool, dto: &NewTimerLog) -> Result<TimerLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO timer_logs (configured_minutes, executed_at, label) \
             VALUES ($1, $2::timestamptz, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimerLog>(&query)
            .bind(dto.configured_minutes)
            .bind(&dto.executed_at)
            .bind(&dto.label)
            .fetch_one(pool)
            .await
    }

    /// List the most recently created timer logs, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<TimerLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timer_logs \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, TimerLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
