//! Shared test fixtures for the trafficview-sdk integration tests.
//!
//! Provides tagged sample snapshots/pages for atomicity assertions, fake
//! `SnapshotSource`/`RecordSearch` implementations with controllable
//! completion, and helpers for mounting the full set of dashboard endpoint
//! mocks on a mockito server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{oneshot, Semaphore};

use trafficview_sdk::models::{
    AlertRecord, DashboardSnapshot, HourlySeries, NamedValue, Prediction, QueryPage, QueryParams,
    TrafficRecord,
};
use trafficview_sdk::{RecordSearch, Result, SnapshotSource, TrafficViewError};

// ---------------------------------------------------------------------------
// Tagged sample data
// ---------------------------------------------------------------------------

/// A complete snapshot whose every field is derived from `tag`, so a test
/// can assert that all fields of a committed snapshot came from the same
/// refresh round.
pub fn sample_snapshot(tag: i64) -> DashboardSnapshot {
    DashboardSnapshot {
        hourly: HourlySeries {
            hours: (0..24).map(|h| format!("{:02}:00", h)).collect(),
            data: (0..24).map(|h| tag * 1000 + h).collect(),
        },
        station_rank: vec![NamedValue {
            name: format!("卡口-{}", tag),
            value: tag * 10,
        }],
        geo_distribution: vec![NamedValue {
            name: format!("区县-{}", tag),
            value: tag * 20,
        }],
        vehicle_types: vec![NamedValue {
            name: format!("类型-{}", tag),
            value: tag * 30,
        }],
        vehicle_brands: vec![NamedValue {
            name: format!("品牌-{}", tag),
            value: tag * 40,
        }],
        alerts: vec![AlertRecord {
            plate: format!("苏C{:05}", tag),
            message: format!("{}分钟内从 [卡口A] 移动到 [卡口B]", tag),
            time: "2025-11-01 08:03:00".to_string(),
            duration: format!("{}分钟", tag),
        }],
        prediction: Some(Prediction {
            station: "全市".to_string(),
            hour: 14,
            predicted_flow: tag * 50,
        }),
    }
}

/// A result page tagged the same way.
pub fn sample_page(tag: i64) -> QueryPage {
    QueryPage {
        total: 1000 + tag as u64,
        records: vec![TrafficRecord {
            sequence: tag,
            station: format!("卡口-{}", tag),
            plate: format!("苏C{:05}", tag),
            vehicle_type: "K11".to_string(),
            province: "丰县".to_string(),
            fuel_type: Some("汽油".to_string()),
            crossed_at: "2025-11-01 08:00:00".to_string(),
        }],
    }
}

// ---------------------------------------------------------------------------
// CountingSource — immediate snapshots, one tag per round
// ---------------------------------------------------------------------------

/// `SnapshotSource` that settles immediately. Each round returns
/// `sample_snapshot(round_number)`, or fails while `fail` is set.
pub struct CountingSource {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl CountingSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl SnapshotSource for CountingSource {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        let round = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail.load(Ordering::SeqCst) {
            Err(TrafficViewError::Shape("scripted round failure".into()))
        } else {
            Ok(sample_snapshot(round as i64))
        }
    }
}

// ---------------------------------------------------------------------------
// GatedSource — rounds block until released
// ---------------------------------------------------------------------------

/// `SnapshotSource` whose rounds block on a gate until the test calls
/// [`release`](Self::release), for exercising in-flight cancellation.
pub struct GatedSource {
    pub calls: AtomicUsize,
    gate: Semaphore,
    tag: i64,
}

impl GatedSource {
    pub fn new(tag: i64) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            gate: Semaphore::new(0),
            tag,
        })
    }

    /// Let one blocked round complete.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl SnapshotSource for GatedSource {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self.gate.acquire().await.expect("gate closed");
        permit.forget();
        Ok(sample_snapshot(self.tag))
    }
}

// ---------------------------------------------------------------------------
// ScriptedSearch — per-call completion controlled by the test
// ---------------------------------------------------------------------------

/// `RecordSearch` whose responses are delivered through oneshot channels in
/// dispatch order, so a test can settle overlapping fetches out of order.
/// Also records the params of every call it sees.
pub struct ScriptedSearch {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<QueryPage>>>>,
    pub seen_params: Mutex<Vec<QueryParams>>,
}

impl ScriptedSearch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pending: Mutex::new(VecDeque::new()),
            seen_params: Mutex::new(Vec::new()),
        })
    }

    /// Queue one scripted response; the returned sender settles the
    /// matching (dispatch-ordered) `search` call.
    pub fn push_response(&self) -> oneshot::Sender<Result<QueryPage>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push_back(rx);
        tx
    }
}

#[async_trait]
impl RecordSearch for ScriptedSearch {
    async fn search(&self, params: &QueryParams) -> Result<QueryPage> {
        self.seen_params.lock().push(params.clone());
        let rx = self
            .pending
            .lock()
            .pop_front()
            .expect("no scripted response queued");
        rx.await
            .unwrap_or_else(|_| Err(TrafficViewError::Shape("scripted response dropped".into())))
    }
}

// ---------------------------------------------------------------------------
// Mockito helpers
// ---------------------------------------------------------------------------

/// Wrap a payload in the success envelope.
pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({"code": 200, "msg": "success", "data": data}).to_string()
}

/// Canonical 24-bucket hourly payload: `"00:00"`..`"23:00"`,
/// counts `100, 120, .., 560`.
pub fn hourly_payload() -> serde_json::Value {
    serde_json::json!({
        "hours": (0..24).map(|h| format!("{:02}:00", h)).collect::<Vec<_>>(),
        "data": (0..24).map(|h| 100 + h * 20).collect::<Vec<_>>(),
    })
}

/// Station ranking payload keyed by internal checkpoint codes.
pub fn station_rank_payload() -> serde_json::Value {
    serde_json::json!([
        {"name": "S250_Pizhou_Sulu", "value": 4200},
        {"name": "G518_Fengxian_Malou", "value": 3100},
    ])
}

/// Region distribution payload (already display names).
pub fn map_data_payload() -> serde_json::Value {
    serde_json::json!([
        {"name": "丰县", "value": 9000},
        {"name": "沛县", "value": 7000},
    ])
}

/// One structured plate-clone report, 3 minutes between sightings, with a
/// partially masked plate.
pub fn warnings_payload() -> serde_json::Value {
    serde_json::json!([{
        "hphm": "苏C·12**5",
        "prevKkmc": "S250_Pizhou_Sulu",
        "currKkmc": "G3_Sulu",
        "prevTime": "2025-11-01 08:00:00",
        "currTime": "2025-11-01 08:03:00",
    }])
}

/// Mount success mocks for all seven dashboard endpoints, with the
/// prediction mock matching `hour`. Returns the mocks so tests can assert
/// on them; payloads are the canonical ones above.
pub async fn mount_dashboard_ok(server: &mut mockito::ServerGuard, hour: u32) -> Vec<mockito::Mock> {
    let mut mocks = Vec::new();

    for (path, payload) in [
        ("/api/stats/hour_count", hourly_payload()),
        ("/api/stats/kkmc_count", station_rank_payload()),
        ("/api/stats/map_data", map_data_payload()),
        (
            "/api/stats/vehicle_type",
            serde_json::json!([{"name": "K11", "value": 120}, {"name": "K22", "value": 80}]),
        ),
        (
            "/api/stats/vehicle_brand",
            serde_json::json!([{"name": "比亚迪", "value": 50}]),
        ),
        ("/api/warnings/realtime", warnings_payload()),
    ] {
        mocks.push(
            server
                .mock("GET", path)
                // No minimum hit count: lets a mock created later in a test
                // override this baseline one (mockito serves unhit mocks in
                // creation order before falling back to the newest match).
                .expect_at_least(0)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(envelope(payload))
                .create_async()
                .await,
        );
    }

    mocks.push(
        server
            .mock("GET", "/api/predict/flow")
            .expect_at_least(0)
            .match_query(mockito::Matcher::UrlEncoded("hour".into(), hour.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(serde_json::json!({
                "kkmc": "全市",
                "hour": hour,
                "predicted_flow": 480,
            })))
            .create_async()
            .await,
    );

    mocks
}
