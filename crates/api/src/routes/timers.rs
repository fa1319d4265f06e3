//! Route definitions for timer logs, mounted at `/api/timers`.

use axum::routing::get;
use axum::Router;

use crate::handlers::timers;
use crate::state::AppState;

/// ```text
/// GET  /  -> list_timer_logs
/// POST /  -> create_timer_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(timers::list_timer_logs).post(timers::create_timer_log),
    )
}
