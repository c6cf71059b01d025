//! Background refresh of the working set.
//!
//! The sheet export changes at most daily, so the session reloads on a
//! 24-hour interval rather than watching for changes.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// How often the reload callback fires.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

/// Handle to a running refresh task. Dropping it aborts the task, so a
/// torn-down session never leaves a timer running.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stops the refresh task.
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a task that invokes `reload` once every [`REFRESH_INTERVAL`].
///
/// The first invocation happens one interval after the spawn, not
/// immediately; the caller has already loaded the initial set.
pub fn spawn_daily_refresh<F>(mut reload: F) -> RefreshHandle
where
    F: FnMut() + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = time::interval(REFRESH_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; consume it so the initial
        // load is not doubled.
        interval.tick().await;
        loop {
            interval.tick().await;
            log::info!("Daily refresh interval elapsed, reloading records");
            reload();
        }
    });

    RefreshHandle { task }
}
