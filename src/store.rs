//! Shared observable store holding the current [`DashboardSnapshot`].
//!
//! Single source of truth between the data producer (gateway) and the many
//! independent consumers (chart panels). An explicit, constructor-built
//! container rather than a process-wide singleton, so tests can run any
//! number of independent instances.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::models::DashboardSnapshot;

type Listener = Box<dyn Fn(&DashboardSnapshot) + Send + Sync>;

/// Token returned by [`DashboardStore::subscribe`]; pass it back to
/// [`DashboardStore::unsubscribe`] to deregister.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
}

/// Observable container for the dashboard snapshot.
///
/// Writes happen only through [`commit`](Self::commit), which replaces the
/// snapshot as a whole. Readers hold an `Arc` to an immutable snapshot, so
/// a commit can never tear the fields a consumer is looking at.
pub struct DashboardStore {
    snapshot: RwLock<Arc<DashboardSnapshot>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(DashboardSnapshot::default())
    }
}

impl DashboardStore {
    /// Create a store seeded with `initial`.
    pub fn new(initial: DashboardSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(initial)),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The current snapshot. The returned reference stays internally
    /// consistent even if a commit happens after this call.
    pub fn snapshot(&self) -> Arc<DashboardSnapshot> {
        self.snapshot.read().clone()
    }

    /// Atomically replace the snapshot and notify all subscribers.
    ///
    /// Listeners run on the committing task, after the new snapshot is
    /// visible to readers. Listeners must not call back into this store.
    pub fn commit(&self, snapshot: DashboardSnapshot) {
        let snapshot = Arc::new(snapshot);
        *self.snapshot.write() = Arc::clone(&snapshot);

        let listeners = self.listeners.lock();
        for (_, listener) in listeners.iter() {
            listener(&snapshot);
        }
    }

    /// Register a listener fired after every commit.
    pub fn subscribe(
        &self,
        listener: impl Fn(&DashboardSnapshot) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, Box::new(listener)));
        Subscription { id }
    }

    /// Deregister a listener. Idempotent: unsubscribing an already removed
    /// subscription is a no-op.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        self.listeners
            .lock()
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Number of currently registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }
}
