//! Remote data gateway: one fan-out-and-join refresh round.
//!
//! A round issues all dashboard reads concurrently, waits for every one to
//! settle, and either assembles a complete [`DashboardSnapshot`] or fails
//! as a whole. Partial results are never committed -- mixing fields from a
//! half-successful batch would show charts from different rounds side by
//! side. There is no retry within a round; the next scheduled round is the
//! retry mechanism.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Timelike;

use crate::config;
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::{DashboardSnapshot, HourlySeries, NamedValue, Prediction, RawWarning};
use crate::translate;

/// Source of complete dashboard snapshots.
///
/// The seam between the scheduler and the HTTP layer; tests drive the
/// scheduler with in-memory implementations.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Run one refresh round and return the assembled snapshot.
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot>;
}

/// Gateway fetching all dashboard data sources in one coordinated round.
pub struct SnapshotGateway {
    api: Arc<ApiClient>,
}

impl SnapshotGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Run one refresh round with the prediction request pinned to `hour`.
    ///
    /// [`fetch_snapshot`](SnapshotSource::fetch_snapshot) reads the local
    /// clock; this variant exists so callers and tests can parameterize the
    /// prediction hour explicitly.
    pub async fn fetch_snapshot_at(&self, hour: u32) -> Result<DashboardSnapshot> {
        let prediction_query = [("hour", hour)];
        let (hourly, stations, regions, types, brands, warnings, prediction) = futures::join!(
            self.api.get_data::<HourlySeries>(config::HOUR_COUNT_PATH),
            self.api.get_data::<Vec<NamedValue>>(config::KKMC_COUNT_PATH),
            self.api.get_data::<Vec<NamedValue>>(config::MAP_DATA_PATH),
            self.api.get_data::<Vec<NamedValue>>(config::VEHICLE_TYPE_PATH),
            self.api.get_data::<Vec<NamedValue>>(config::VEHICLE_BRAND_PATH),
            self.api.get_data::<Vec<RawWarning>>(config::WARNINGS_PATH),
            self.api
                .get_data_with_query::<Prediction, _>(config::PREDICT_FLOW_PATH, &prediction_query),
        );

        // All-or-nothing: the first failed sub-request fails the round.
        Ok(DashboardSnapshot {
            hourly: hourly?,
            station_rank: translate_station_names(stations?),
            geo_distribution: regions?,
            vehicle_types: types?,
            vehicle_brands: brands?,
            alerts: warnings?
                .into_iter()
                .map(translate::synthesize_warning)
                .collect(),
            prediction: Some(prediction?),
        })
    }
}

fn translate_station_names(items: Vec<NamedValue>) -> Vec<NamedValue> {
    items
        .into_iter()
        .map(|item| NamedValue {
            name: translate::station_display_name(&item.name),
            value: item.value,
        })
        .collect()
}

#[async_trait]
impl SnapshotSource for SnapshotGateway {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        self.fetch_snapshot_at(chrono::Local::now().hour()).await
    }
}
