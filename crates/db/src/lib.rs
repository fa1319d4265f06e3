//! Storage layer for timer logs.
//!
//! Builds the process-wide PostgreSQL pool from externally supplied
//! credentials and exposes the `timer_logs` repository behind the
//! [`TimerLogStore`] trait.

pub mod credentials;
pub mod models;
pub mod repositories;
pub mod store;

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub use credentials::{ConfigError, StorageCredentials};
pub use store::{PgTimerLogStore, TimerLogStore};

pub type DbPool = sqlx::PgPool;

/// Maximum number of pooled connections.
const MAX_CONNECTIONS: u32 = 20;

/// Build connection options from credentials.
///
/// The secret key is applied as the connection password, overriding any
/// password embedded in the URL.
pub fn connect_options(credentials: &StorageCredentials) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(credentials.url())?.password(credentials.secret_key()))
}

/// Create a connection pool from storage credentials.
pub async fn create_pool(credentials: &StorageCredentials) -> Result<DbPool, sqlx::Error> {
    let options = connect_options(credentials)?;
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
