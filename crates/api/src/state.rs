use std::sync::Arc;

use timerlog_db::TimerLogStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup; cloning only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide storage handle.
    pub store: Arc<dyn TimerLogStore>,
}
