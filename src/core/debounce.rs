//! Per-key debounced action scheduling
//!
//! A `Debouncer` defers an action until a quiet period elapses without a
//! superseding trigger for the same key. Intermediate triggers are dropped,
//! not queued: scheduling a new action for a key aborts whatever was pending
//! for that key. Keys are independent of each other.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Default quiet period between the last trigger and the action firing.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Debounces keyed actions onto the tokio runtime.
///
/// Dropping the debouncer aborts everything still pending, so an action can
/// never fire against a torn-down owner.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Schedule `action` to run after the quiet period, superseding any
    /// pending action for the same `key`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, key: &str, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // The window is anchored at the trigger, not at the spawned task's
        // first poll: a loaded executor must not stretch the quiet period.
        let deadline = Instant::now() + self.quiet_period;
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            action.await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(previous) = pending.insert(key.to_string(), handle) {
            previous.abort();
        }
    }

    /// Whether an action is still pending for `key`
    #[must_use]
    pub fn is_pending(&self, key: &str) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel every pending action without running it
    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        for (_, handle) in pending.drain() {
            handle.abort();
        }
    }

    /// Wait for all currently pending actions to run to completion.
    ///
    /// One-shot callers (the CLI) use this so a scheduled write survives
    /// process exit; long-lived owners normally never need it.
    pub async fn flush(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut pending = self
                .pending
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            pending.drain().map(|(_, handle)| handle).collect()
        };
        for handle in handles {
            // Aborted tasks report a JoinError; that is expected here.
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
