//! Supervised polling task driving refresh rounds on a fixed cadence.
//!
//! One immediate round on start, then one per period tick. A failed round
//! is logged and the cadence continues unchanged -- no backoff, no circuit
//! breaker; staleness is user-visible and self-heals on the next tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::gateway::SnapshotSource;
use crate::store::DashboardStore;

/// Starts the polling task. Requires a running tokio runtime.
pub struct RefreshScheduler;

impl RefreshScheduler {
    /// Spawn the polling loop: one immediate round, then one per `period`.
    ///
    /// Successful rounds commit their snapshot to `store`; failed rounds
    /// leave the previous snapshot in place. The returned handle stops the
    /// loop; dropping it cancels too.
    pub fn start(
        source: Arc<dyn SnapshotSource>,
        store: Arc<DashboardStore>,
        period: Duration,
    ) -> SchedulerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let wake = Arc::new(Notify::new());
        let task = tokio::spawn(run_loop(
            source,
            store,
            period,
            Arc::clone(&cancelled),
            Arc::clone(&wake),
        ));
        SchedulerHandle {
            cancelled,
            wake,
            task: Some(task),
        }
    }
}

async fn run_loop(
    source: Arc<dyn SnapshotSource>,
    store: Arc<DashboardStore>,
    period: Duration,
    cancelled: Arc<AtomicBool>,
    wake: Arc<Notify>,
) {
    // First tick completes immediately, giving the mount-time fetch.
    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = wake.notified() => {}
        }
        if cancelled.load(Ordering::SeqCst) {
            break;
        }
        match source.fetch_snapshot().await {
            Ok(snapshot) => {
                // An in-flight round may outlive a stop() call; its result
                // must not reach the store after teardown.
                if cancelled.load(Ordering::SeqCst) {
                    break;
                }
                store.commit(snapshot);
                debug!("refresh round committed");
            }
            Err(e) => warn!(error = %e, "refresh round failed, keeping previous snapshot"),
        }
    }
}

/// Handle to an active polling loop.
pub struct SchedulerHandle {
    cancelled: Arc<AtomicBool>,
    wake: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stop the loop and wait for the task to wind down.
    ///
    /// An in-flight round is allowed to finish its network I/O, but its
    /// result is not committed once cancellation is flagged.
    pub async fn stop(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Whether the loop has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        // notify_one leaves a permit if the loop is mid-fetch, so the next
        // wait returns immediately and the flag check runs.
        self.wake.notify_one();
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
