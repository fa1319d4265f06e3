//! Handlers for the timer log endpoint.
//!
//! Create validates input and inserts one row; list returns the most recent
//! rows. Storage failures are logged and reported with a generic message.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use timerlog_core::timer_log::{self, RECENT_LOG_LIMIT};
use timerlog_db::models::timer_log::{CreateTimerLog, NewTimerLog};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Client-facing message when an insert fails.
pub const CREATE_FAILED: &str = "Failed to save timer";
/// Client-facing message when listing fails.
pub const LIST_FAILED: &str = "Failed to load timer logs";

/// POST /api/timers
///
/// Record one timer start. Returns 201 with the stored row.
pub async fn create_timer_log(
    State(state): State<AppState>,
    payload: Result<Json<CreateTimerLog>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let configured_minutes = timer_log::validate_configured_minutes(input.configured_minutes)?;
    let label = timer_log::normalize_label(input.label.as_deref())?;
    let executed_at = timer_log::require_executed_at(input.executed_at)?;

    let dto = NewTimerLog {
        configured_minutes,
        executed_at,
        label,
    };

    let log = state
        .store
        .insert(&dto)
        .await
        .map_err(AppError::storage(CREATE_FAILED))?;

    tracing::info!(
        timer_log_id = log.id,
        configured_minutes = log.configured_minutes,
        "Timer log created",
    );

    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/timers
///
/// List the most recent timer logs, newest first.
pub async fn list_timer_logs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let logs = state
        .store
        .list_recent(RECENT_LOG_LIMIT)
        .await
        .map_err(AppError::storage(LIST_FAILED))?;

    Ok(Json(logs))
}
