#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{DateTime, TimeDelta, Utc};
use http_body_util::BodyExt;
use timerlog_db::models::timer_log::{NewTimerLog, TimerLog};
use timerlog_db::TimerLogStore;
use tower::ServiceExt;

use timerlog_api::config::ServerConfig;
use timerlog_api::router::build_app_router;
use timerlog_api::state::AppState;

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// In-process [`TimerLogStore`] mirroring the PostgreSQL semantics the
/// handlers rely on: storage-assigned ids and strictly increasing
/// `created_at`, newest-first listing, and rejection of unparseable
/// `executed_at` text.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<TimerLog>>,
}

impl MemoryStore {
    pub fn rows(&self) -> Vec<TimerLog> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimerLogStore for MemoryStore {
    async fn insert(&self, dto: &NewTimerLog) -> Result<TimerLog, sqlx::Error> {
        let executed_at = DateTime::parse_from_rfc3339(&dto.executed_at)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        let mut rows = self.rows.lock().unwrap();
        let mut created_at = Utc::now();
        if let Some(last) = rows.last() {
            created_at = created_at.max(last.created_at + TimeDelta::microseconds(1));
        }

        let row = TimerLog {
            id: rows.len() as i64 + 1,
            configured_minutes: dto.configured_minutes,
            executed_at,
            label: dto.label.clone(),
            created_at,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<TimerLog>, sqlx::Error> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// A store whose every call fails, as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl TimerLogStore for FailingStore {
    async fn insert(&self, _dto: &NewTimerLog) -> Result<TimerLog, sqlx::Error> {
        Err(sqlx::Error::Protocol("connection reset by secret-host".into()))
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<TimerLog>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router around the given store.
pub fn build_test_app(store: Arc<dyn TimerLogStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
