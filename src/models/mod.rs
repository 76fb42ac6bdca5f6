//! Typed wire and domain models for the TrafficView backend API.
//!
//! Wire field names (`kkmc`, `hphm`, `GCXH`, ...) follow the backend's
//! schema; the Rust-side names spell them out. Every endpoint wraps its
//! payload in the [`Envelope`] `{code, msg, data}` structure.

pub mod dashboard;
pub mod query;

pub use dashboard::{
    AlertRecord, CloneReport, DashboardSnapshot, HourlySeries, NamedValue, Prediction, RawWarning,
};
pub use query::{QueryPage, QueryParams, TrafficRecord};

use serde::Deserialize;

/// The `{code, msg, data}` wrapper every endpoint responds with.
///
/// `code == 200` signals application-level success; anything else carries a
/// human-readable reason in `msg` and usually no `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}
