pub mod health;
pub mod page;
pub mod timers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /timers        list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/timers", timers::router())
}
