//! TrafficView SDK for Rust.
//!
//! Client for a checkpoint traffic-monitoring backend. Maintains two
//! independent client-side stores over the backend's read-only JSON API:
//! an observable [`DashboardStore`] refreshed by a polling scheduler (one
//! concurrent fan-out round across all statistics endpoints, committed
//! all-or-nothing), and a [`QueryStore`] for the interactive paginated
//! record search.
//!
//! # Quick start
//!
//! ```no_run
//! use trafficview_sdk::TrafficViewSdk;
//!
//! # async fn example() -> trafficview_sdk::Result<()> {
//! let sdk = TrafficViewSdk::builder()
//!     .base_url("http://127.0.0.1:3000")
//!     .build()?;
//!
//! // One manual refresh round
//! sdk.refresh_now().await?;
//! println!("{} checkpoints ranked", sdk.dashboard().snapshot().station_rank.len());
//!
//! // Continuous polling (30s by default); stops on handle.stop() or drop
//! let polling = sdk.start_polling();
//!
//! // Paginated record search
//! sdk.query().set_params(|p| {
//!     p.plate = Some("苏C".into());
//!     p.page = 1;
//! });
//! sdk.query().fetch_data().await;
//! let page = sdk.query().data();
//! println!("{} of {} records", page.records.len(), page.total);
//!
//! polling.stop().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod models;
pub mod query;
pub mod scheduler;
pub mod store;
pub mod translate;

pub use error::{Result, TrafficViewError};
pub use gateway::{SnapshotGateway, SnapshotSource};
pub use http::ApiClient;
pub use models::{DashboardSnapshot, QueryPage, QueryParams, TrafficRecord};
pub use query::{QueryStore, RecordSearch};
pub use scheduler::{RefreshScheduler, SchedulerHandle};
pub use store::{DashboardStore, Subscription};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// TrafficViewSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TrafficViewSdk`] instance.
///
/// Use [`TrafficViewSdk::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](TrafficViewSdkBuilder::build).
pub struct TrafficViewSdkBuilder {
    base_url: String,
    timeout: Duration,
    poll_period: Duration,
}

impl Default for TrafficViewSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            poll_period: config::DEFAULT_POLL_PERIOD,
        }
    }
}

impl TrafficViewSdkBuilder {
    /// Set the backend base URL. Defaults to the local mock backend.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request HTTP timeout. Defaults to 10 seconds.
    ///
    /// The timeout bounds every sub-request of a refresh round, so a hung
    /// endpoint cannot stall the all-or-nothing commit indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling period used by [`TrafficViewSdk::start_polling`].
    /// Defaults to 30 seconds.
    pub fn poll_period(mut self, period: Duration) -> Self {
        self.poll_period = period;
        self
    }

    /// Build the SDK: HTTP client, snapshot gateway and both stores.
    pub fn build(self) -> Result<TrafficViewSdk> {
        let api = Arc::new(ApiClient::new(self.base_url, self.timeout)?);
        let gateway = Arc::new(SnapshotGateway::new(Arc::clone(&api)));
        let dashboard = Arc::new(DashboardStore::default());
        let query = QueryStore::new(Arc::clone(&api) as Arc<dyn RecordSearch>);
        Ok(TrafficViewSdk {
            api,
            gateway,
            dashboard,
            query,
            poll_period: self.poll_period,
        })
    }
}

// ---------------------------------------------------------------------------
// TrafficViewSdk
// ---------------------------------------------------------------------------

/// The main entry point for the TrafficView SDK.
///
/// Owns the HTTP client, the snapshot gateway and both stores. Created via
/// [`TrafficViewSdk::builder()`].
pub struct TrafficViewSdk {
    api: Arc<ApiClient>,
    gateway: Arc<SnapshotGateway>,
    dashboard: Arc<DashboardStore>,
    query: QueryStore,
    poll_period: Duration,
}

impl TrafficViewSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> TrafficViewSdkBuilder {
        TrafficViewSdkBuilder::default()
    }

    /// The observable dashboard snapshot store.
    pub fn dashboard(&self) -> &Arc<DashboardStore> {
        &self.dashboard
    }

    /// The interactive record query store.
    pub fn query(&self) -> &QueryStore {
        &self.query
    }

    /// The snapshot gateway, for callers that want to run rounds manually
    /// (e.g. with a pinned prediction hour).
    pub fn gateway(&self) -> &Arc<SnapshotGateway> {
        &self.gateway
    }

    /// Run one refresh round now and commit it on success.
    ///
    /// On failure the dashboard store keeps the previous snapshot and the
    /// error is returned to the caller.
    pub async fn refresh_now(&self) -> Result<()> {
        let snapshot = self.gateway.fetch_snapshot().await?;
        self.dashboard.commit(snapshot);
        Ok(())
    }

    /// Arm the refresh scheduler with the configured polling period.
    ///
    /// Must be called within a tokio runtime. The loop stops when the
    /// returned handle is stopped or dropped.
    pub fn start_polling(&self) -> SchedulerHandle {
        RefreshScheduler::start(
            Arc::clone(&self.gateway) as Arc<dyn SnapshotSource>,
            Arc::clone(&self.dashboard),
            self.poll_period,
        )
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for TrafficViewSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrafficViewSdk(base_url={}, poll_period={:?}, subscribers={})",
            self.api.base_url(),
            self.poll_period,
            self.dashboard.subscriber_count()
        )
    }
}
