use std::collections::HashMap;
use std::time::Duration;

/// Base URL of the backend during local development (Vite mock proxy).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Envelope `code` value signalling application-level success.
pub const SUCCESS_CODE: i64 = 200;

/// Per-request timeout. A hung sub-request would otherwise stall a whole
/// all-or-nothing refresh round.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Cadence of the dashboard refresh scheduler.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(30);

/// Default page size for the interactive record query.
pub const DEFAULT_PAGE_SIZE: u64 = 15;

// Endpoint paths. All respond with the `{code, msg, data}` envelope.
pub const QUERY_PATH: &str = "/api/query";
pub const HOUR_COUNT_PATH: &str = "/api/stats/hour_count";
pub const KKMC_COUNT_PATH: &str = "/api/stats/kkmc_count";
pub const MAP_DATA_PATH: &str = "/api/stats/map_data";
pub const VEHICLE_TYPE_PATH: &str = "/api/stats/vehicle_type";
pub const VEHICLE_BRAND_PATH: &str = "/api/stats/vehicle_brand";
pub const WARNINGS_PATH: &str = "/api/warnings/realtime";
pub const PREDICT_FLOW_PATH: &str = "/api/predict/flow";

/// Checkpoint code to display name translation table.
///
/// The backend keys some station-ranked payloads by internal checkpoint
/// codes; the display names are what the deployment's operators know the
/// checkpoints as. Codes missing from this table are passed through
/// untranslated (see [`translate::station_display_name`](crate::translate::station_display_name)).
pub fn station_names() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("S250_Pizhou_Sulu", "邳州S250-苏鲁界卡口"),
        ("G3_Sulu", "京台G3-苏鲁界卡口"),
        ("S325_Suining_West", "睢宁S325-西卡口"),
        ("G104_Suining_Suwan", "睢宁G104-苏皖界卡口"),
        ("G311_Tongshan_Suwan", "铜山G311-苏皖界卡口"),
        ("S323_Xinyi_Woyao", "新沂S323-瓦窑卡口"),
        ("G235_Xinyi_Jiaojie", "新沂G235-交界卡口"),
        ("G104_Tongshan_Sulu", "铜山G104-苏鲁界卡口"),
        ("G310_Tongshan_Suwan", "铜山G310-苏皖界卡口"),
        ("G518_Fengxian_Malou", "丰县G518-马楼卡口"),
    ])
}
