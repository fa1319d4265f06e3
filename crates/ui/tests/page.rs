//! Timer page tests against a stub timer log server on a real socket.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use timerlog_ui::client::TimerLogClient;
use timerlog_ui::page::TimerPage;

type Rows = Arc<Mutex<Vec<Value>>>;

#[derive(Clone)]
struct Stub {
    rows: Rows,
    fail_list: Arc<AtomicBool>,
}

async fn list(State(stub): State<Stub>) -> Result<Json<Value>, StatusCode> {
    if stub.fail_list.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let rows = stub.rows.lock().unwrap();
    Ok(Json(Value::Array(rows.iter().rev().cloned().collect())))
}

async fn create(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut rows = stub.rows.lock().unwrap();
    let row = json!({
        "id": rows.len() + 1,
        "configured_minutes": body["configuredMinutes"],
        "executed_at": body["executedAt"],
        "label": body.get("label").cloned().unwrap_or(json!("")),
        "created_at": "2024-01-01T00:00:00Z",
    });
    rows.push(row.clone());
    (StatusCode::CREATED, Json(row))
}

/// Serve the stub on an ephemeral port and return its base URL.
async fn spawn_stub(rows: Rows) -> String {
    spawn_stub_with(Stub {
        rows,
        fail_list: Arc::new(AtomicBool::new(false)),
    })
    .await
}

async fn spawn_stub_with(stub: Stub) -> String {
    serve(
        Router::new()
            .route("/api/timers", get(list).post(create))
            .with_state(stub),
    )
    .await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn load_fetches_existing_logs() {
    let rows: Rows = Arc::new(Mutex::new(vec![json!({
        "id": 1,
        "configured_minutes": 5.0,
        "executed_at": "2024-01-01T00:00:00.000Z",
        "label": "tea",
        "created_at": "2024-01-01T00:00:01Z",
    })]));
    let url = spawn_stub(rows).await;

    let mut page = TimerPage::new(TimerLogClient::new(url), 1);
    page.load().await;

    assert!(!page.loading_logs());
    assert_eq!(page.logs().len(), 1);
    assert_eq!(page.logs()[0].label, "tea");
}

#[tokio::test]
async fn start_records_the_run_and_refreshes_logs() {
    let rows: Rows = Arc::new(Mutex::new(Vec::new()));
    let url = spawn_stub(rows.clone()).await;

    let mut page = TimerPage::new(TimerLogClient::new(url), 2);
    assert!(page.start(Some("deep work")).await);

    let countdown = page.countdown();
    assert!(countdown.running());
    assert!(countdown.remaining_seconds() <= 120 && countdown.remaining_seconds() >= 118);

    let stored = rows.lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["configured_minutes"], 2);
    assert_eq!(stored[0]["label"], "deep work");
    let executed_at = stored[0]["executed_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(executed_at).is_ok());
    assert!(executed_at.ends_with('Z'));

    assert_eq!(page.logs().len(), 1);
    assert_eq!(page.logs()[0].configured_minutes, 2.0);
}

#[tokio::test]
async fn start_while_running_is_ignored() {
    let rows: Rows = Arc::new(Mutex::new(Vec::new()));
    let url = spawn_stub(rows.clone()).await;

    let mut page = TimerPage::new(TimerLogClient::new(url), 1);
    assert!(page.start(None).await);
    assert!(!page.start(None).await);

    assert_eq!(rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn zero_minutes_neither_starts_nor_records() {
    let rows: Rows = Arc::new(Mutex::new(Vec::new()));
    let url = spawn_stub(rows.clone()).await;

    let mut page = TimerPage::new(TimerLogClient::new(url), 0);
    assert!(!page.start(None).await);

    assert!(!page.countdown().running());
    assert!(rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn network_failure_does_not_stop_the_countdown() {
    let mut page = TimerPage::new(TimerLogClient::new(unreachable_url().await), 1);

    assert!(page.start(None).await);

    assert!(page.countdown().running());
    assert!(page.countdown().remaining_seconds() > 0);
    assert!(page.logs().is_empty());
    assert!(!page.loading_logs());

    page.pause();
    assert!(!page.countdown().running());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_logs() {
    let stub = Stub {
        rows: Arc::new(Mutex::new(vec![json!({
            "id": 1,
            "configured_minutes": 1.0,
            "executed_at": "2024-01-01T00:00:00.000Z",
            "label": "",
            "created_at": "2024-01-01T00:00:01Z",
        })])),
        fail_list: Arc::new(AtomicBool::new(false)),
    };
    let url = spawn_stub_with(stub.clone()).await;

    let mut page = TimerPage::new(TimerLogClient::new(url), 1);
    page.load().await;
    assert_eq!(page.logs().len(), 1);

    stub.fail_list.store(true, Ordering::SeqCst);
    page.refresh_logs().await;

    assert_eq!(page.logs().len(), 1);
    assert!(!page.loading_logs());
}

#[tokio::test]
async fn loading_flag_is_visible_while_the_list_is_fetched() {
    let url = serve(Router::new().route(
        "/api/timers",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Json(json!([]))
        }),
    ))
    .await;

    let mut page = TimerPage::new(TimerLogClient::new(url), 1);
    let mut loading = page.subscribe_loading();
    assert!(!*loading.borrow());

    let ((), saw_loading) = tokio::join!(page.refresh_logs(), async {
        loading.wait_for(|l| *l).await.map(|l| *l).unwrap_or(false)
    });

    assert!(saw_loading);
    assert!(!page.loading_logs());
    assert!(page.logs().is_empty());
}
