//! Timer log model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timerlog_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `timer_logs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TimerLog {
    pub id: DbId,
    pub configured_minutes: f64,
    pub executed_at: Timestamp,
    pub label: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Request body for `POST /api/timers`.
///
/// Every field is optional at the wire level so missing values surface as
/// validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimerLog {
    pub configured_minutes: Option<f64>,
    pub executed_at: Option<String>,
    pub label: Option<String>,
}

/// Validated values ready to be inserted.
///
/// `executed_at` stays opaque text; storage casts it to `TIMESTAMPTZ`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimerLog {
    pub configured_minutes: f64,
    pub executed_at: String,
    pub label: String,
}
