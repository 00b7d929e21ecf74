//! Business statistics

use super::query;
use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::{Statistics, iso_date};
use crate::sdk::types::Envelope;
use chrono::NaiveDate;

/// `/api/statistics` sub-client
#[derive(Debug, Clone, Copy)]
pub struct StatisticsApi<'a> {
    pub(crate) api: &'a ApiClient,
}

impl StatisticsApi<'_> {
    pub async fn get_today(&self) -> Result<Statistics> {
        Envelope::from_value(self.api.get("/api/statistics/today").await?)
            .into_data_or_default("failed to load today's statistics")
    }

    pub async fn get_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Statistics> {
        let path = format!(
            "/api/statistics/date-range{}",
            query([("startDate", iso_date(start)), ("endDate", iso_date(end))])
        );
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load statistics")
    }

    /// Per-room-type occupancy and revenue
    pub async fn get_room_types(&self) -> Result<Statistics> {
        Envelope::from_value(self.api.get("/api/statistics/room-types").await?)
            .into_data_or_default("failed to load room type statistics")
    }

    pub async fn get_dashboard(&self) -> Result<Statistics> {
        Envelope::from_value(self.api.get("/api/statistics/dashboard").await?)
            .into_data_or_default("failed to load dashboard statistics")
    }
}
