use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chart payloads
// ---------------------------------------------------------------------------

/// One `{name, value}` pair as used by the ranking, distribution and
/// geo endpoints. Ordering within a payload is meaningful (rankings arrive
/// sorted descending by value) and is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: i64,
}

/// The 24-hour flow series from `/api/stats/hour_count`: 24 ordered buckets
/// of label (`"00:00"` .. `"23:00"`) plus crossing count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    pub hours: Vec<String>,
    pub data: Vec<i64>,
}

/// Single-station flow prediction from `/api/predict/flow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "kkmc")]
    pub station: String,
    pub hour: u32,
    pub predicted_flow: i64,
}

// ---------------------------------------------------------------------------
// Plate-clone alerts
// ---------------------------------------------------------------------------

/// One display-ready plate-clone alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub plate: String,
    pub message: String,
    pub time: String,
    pub duration: String,
}

/// Structured plate-clone report: the same plate observed at two
/// checkpoints in implausibly quick succession.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneReport {
    /// Plate number, possibly with masked characters (`*`/`?`).
    pub hphm: String,
    pub prev_kkmc: String,
    pub curr_kkmc: String,
    /// `YYYY-MM-DD HH:MM:SS` sighting timestamps.
    pub prev_time: String,
    pub curr_time: String,
}

/// Wire shape of one `/api/warnings/realtime` entry.
///
/// Older backend builds send pre-formatted strings; current ones send
/// structured [`CloneReport`]s for the client to render. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawWarning {
    Report(CloneReport),
    Formatted(String),
}

// ---------------------------------------------------------------------------
// DashboardSnapshot
// ---------------------------------------------------------------------------

/// One complete, internally consistent copy of all dashboard-visible
/// aggregate data.
///
/// Produced whole by a gateway refresh round and replaced whole by
/// [`DashboardStore::commit`](crate::store::DashboardStore::commit);
/// individual fields are never written in isolation, so consumers can never
/// observe values from two different rounds mixed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSnapshot {
    /// 24-hour flow curve.
    pub hourly: HourlySeries,
    /// Checkpoint flow ranking, descending.
    pub station_rank: Vec<NamedValue>,
    /// Vehicle-origin distribution keyed by region.
    pub geo_distribution: Vec<NamedValue>,
    pub vehicle_types: Vec<NamedValue>,
    pub vehicle_brands: Vec<NamedValue>,
    /// Active plate-clone alerts, newest first as delivered.
    pub alerts: Vec<AlertRecord>,
    /// Flow prediction for the current hour; `None` until the first
    /// successful round.
    pub prediction: Option<Prediction>,
}
