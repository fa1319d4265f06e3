//! A cancellable periodic task.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

/// Spawned task that calls a closure once per period until the closure
/// breaks or the ticker is cancelled. Dropping the ticker cancels it.
pub struct Ticker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn on the current runtime. The first call happens one full
    /// `period` after spawning, not immediately.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        if on_tick().is_break() {
                            break;
                        }
                    }
                }
            }
            tracing::trace!("Ticker stopped");
        });

        Self { cancel, handle }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
