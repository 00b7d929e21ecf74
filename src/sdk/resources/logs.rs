//! Operation logs

use super::query;
use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::{LogQuery, OperationLog};
use crate::sdk::types::{Envelope, Page};

const LOG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `/api/logs` sub-client
#[derive(Debug, Clone, Copy)]
pub struct Logs<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Logs<'_> {
    /// Paged listing. The backend applies one filter: username, then action,
    /// then the time window.
    pub async fn list(&self, filter: &LogQuery) -> Result<Page<OperationLog>> {
        let mut params = vec![
            ("page", filter.page.to_string()),
            ("size", filter.size.to_string()),
        ];
        if let Some(username) = filter.username.as_deref().filter(|u| !u.is_empty()) {
            params.push(("username", username.to_string()));
        }
        if let Some(action) = filter.action.as_deref().filter(|a| !a.is_empty()) {
            params.push(("action", action.to_string()));
        }
        if let (Some(start), Some(end)) = (filter.start, filter.end) {
            params.push(("startDate", start.format(LOG_TIME_FORMAT).to_string()));
            params.push(("endDate", end.format(LOG_TIME_FORMAT).to_string()));
        }

        let path = format!("/api/logs{}", query(params));
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load operation logs")
    }

    /// Newest entries first
    pub async fn recent(&self, limit: u32) -> Result<Vec<OperationLog>> {
        let path = format!("/api/logs/recent{}", query([("limit", limit.to_string())]));
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load recent logs")
    }

    /// Entries recorded for the logged-in operator
    pub async fn my_logs(&self, page: u32, size: u32) -> Result<Page<OperationLog>> {
        let path = format!(
            "/api/logs/my-logs{}",
            query([("page", page.to_string()), ("size", size.to_string())])
        );
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load my logs")
    }

    pub async fn by_action(&self, action: &str, page: u32, size: u32) -> Result<Page<OperationLog>> {
        let path = format!(
            "/api/logs/by-action{}",
            query([
                ("action", action.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ])
        );
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load logs by action")
    }

    pub async fn get_by_id(&self, id: i64) -> Result<OperationLog> {
        Envelope::from_value(self.api.get(&format!("/api/logs/{}", id)).await?)
            .into_data("log entry not found")
    }
}
