use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// QueryParams — request body of POST /api/query
// ---------------------------------------------------------------------------

/// Filter and pagination parameters for the interactive record query.
///
/// Serializes to the exact request body of `POST /api/query`; unset filters
/// are omitted rather than sent as `null`. These params are the single
/// source of truth for the next fetch -- callers changing filter fields must
/// also reset `page` to 1, since the old page number may be out of range
/// under the new criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Checkpoint name filter.
    #[serde(rename = "kkmc", skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    /// Plate number fragment.
    #[serde(rename = "hphm", skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Plate-issuing province or district.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            station: None,
            plate: None,
            start_time: None,
            end_time: None,
            vehicle_type: None,
            province: None,
            fuel_type: None,
            page: 1,
            limit: config::DEFAULT_PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// TrafficRecord / QueryPage — response data of POST /api/query
// ---------------------------------------------------------------------------

/// One crossing record. Immutable once received; `sequence` identifies the
/// row for stable list rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficRecord {
    #[serde(rename = "GCXH")]
    pub sequence: i64,
    #[serde(rename = "KKMC")]
    pub station: String,
    #[serde(rename = "HPHM")]
    pub plate: String,
    #[serde(rename = "CLLX")]
    pub vehicle_type: String,
    #[serde(rename = "CPFSF")]
    pub province: String,
    /// Fuel type; absent in older backend payloads.
    #[serde(rename = "CLZL", default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Crossing timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "GCSJ")]
    pub crossed_at: String,
}

/// One result page: total matching count plus the records of the requested
/// page, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub records: Vec<TrafficRecord>,
}
