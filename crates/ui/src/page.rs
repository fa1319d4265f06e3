//! The timer page: countdown, start recording and the recent-runs list.
//!
//! The countdown starts locally before anything is sent. Recording the start
//! and refreshing the list happen afterwards, and their failures are only
//! logged; the countdown keeps running either way.

use chrono::{SecondsFormat, Utc};
use tokio::sync::watch;

use crate::client::{CreateTimerLogRequest, TimerLogClient, TimerLogView};
use crate::countdown::Countdown;
use crate::session::CountdownSession;

pub struct TimerPage {
    client: TimerLogClient,
    session: CountdownSession,
    logs: Vec<TimerLogView>,
    loading_logs: watch::Sender<bool>,
}

impl TimerPage {
    pub fn new(client: TimerLogClient, minutes: u32) -> Self {
        Self {
            client,
            session: CountdownSession::new(minutes),
            logs: Vec::new(),
            loading_logs: watch::Sender::new(false),
        }
    }

    pub fn countdown(&self) -> Countdown {
        self.session.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.session.subscribe()
    }

    pub fn logs(&self) -> &[TimerLogView] {
        &self.logs
    }

    pub fn loading_logs(&self) -> bool {
        *self.loading_logs.borrow()
    }

    /// Watch the loading flag. It is `true` while a list fetch is in flight.
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading_logs.subscribe()
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.session.set_minutes(minutes);
    }

    /// Initial fetch of the recent-runs list.
    pub async fn load(&mut self) {
        self.refresh_logs().await;
    }

    /// Re-fetch the recent-runs list. On failure the previous list is kept.
    pub async fn refresh_logs(&mut self) {
        self.loading_logs.send_replace(true);
        match self.client.list().await {
            Ok(logs) => {
                tracing::debug!(count = logs.len(), "Timer logs loaded");
                self.logs = logs;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load timer logs");
            }
        }
        self.loading_logs.send_replace(false);
    }

    /// Start the countdown and record the start.
    ///
    /// Returns `false` when nothing started: the countdown is already running
    /// or the configured minutes are zero. A `true` result says nothing about
    /// whether the start was recorded.
    pub async fn start(&mut self, label: Option<&str>) -> bool {
        if self.session.snapshot().running() {
            return false;
        }

        let executed_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if !self.session.start() {
            return false;
        }

        let request = CreateTimerLogRequest {
            configured_minutes: self.session.snapshot().minutes(),
            executed_at,
            label: label.map(str::to_string),
        };

        match self.client.create(&request).await {
            Ok(log) => {
                tracing::info!(timer_log_id = log.id, "Timer start recorded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to record timer start");
            }
        }

        self.refresh_logs().await;
        true
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}
