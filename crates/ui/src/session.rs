//! A countdown tied to its ticker.
//!
//! The ticker exists only while the countdown runs: starting spawns it, and
//! pause, reset, reaching zero or dropping the session all cancel it.
//! State is published through a `watch` channel so front-ends can redraw on
//! every change.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::countdown::{Countdown, Tick};
use crate::ticker::Ticker;

/// Interval between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct CountdownSession {
    state: Arc<watch::Sender<Countdown>>,
    ticker: Option<Ticker>,
}

impl CountdownSession {
    pub fn new(minutes: u32) -> Self {
        let (tx, _rx) = watch::channel(Countdown::new(minutes));
        Self {
            state: Arc::new(tx),
            ticker: None,
        }
    }

    /// Current countdown state.
    pub fn snapshot(&self) -> Countdown {
        *self.state.borrow()
    }

    /// Receive every state change, including ticks.
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.state.subscribe()
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.state.send_modify(|c| c.set_minutes(minutes));
    }

    /// Start from the full duration and spawn the ticker.
    ///
    /// Must be called from within a Tokio runtime. Returns `false` and
    /// leaves everything untouched when the configured minutes are zero.
    pub fn start(&mut self) -> bool {
        if self.snapshot().minutes() == 0 {
            return false;
        }

        self.stop_ticker();
        self.state.send_modify(|c| {
            c.start();
        });

        let state = Arc::clone(&self.state);
        self.ticker = Some(Ticker::spawn(TICK_PERIOD, move || {
            let mut outcome = Tick::Idle;
            state.send_if_modified(|c| {
                outcome = c.tick();
                outcome != Tick::Idle
            });
            match outcome {
                Tick::Continued => ControlFlow::Continue(()),
                Tick::Idle | Tick::Finished => ControlFlow::Break(()),
            }
        }));
        tracing::debug!(minutes = self.snapshot().minutes(), "Countdown started");
        true
    }

    /// Stop ticking; the remaining time is kept.
    pub fn pause(&mut self) {
        self.stop_ticker();
        self.state.send_modify(Countdown::pause);
    }

    /// Stop ticking and restore the full duration.
    pub fn reset(&mut self) {
        self.stop_ticker();
        self.state.send_modify(Countdown::reset);
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
