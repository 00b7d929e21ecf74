//! System settings

use super::segment;
use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::SystemSetting;
use crate::sdk::types::Envelope;

/// `/settings` sub-client
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Settings<'_> {
    pub async fn get_all(&self) -> Result<Vec<SystemSetting>> {
        Envelope::from_value(self.api.get("/settings").await?)
            .into_data_or_default("failed to load settings")
    }

    pub async fn get_by_key(&self, key: &str) -> Result<SystemSetting> {
        let path = format!("/settings/{}", segment(key));
        Envelope::from_value(self.api.get(&path).await?).into_data("setting not found")
    }

    /// Create or overwrite by `setting.key`
    pub async fn save(&self, setting: &SystemSetting) -> Result<SystemSetting> {
        Envelope::from_value(self.api.post("/settings", setting).await?)
            .into_data("failed to save setting")
    }

    pub async fn update(&self, key: &str, setting: &SystemSetting) -> Result<SystemSetting> {
        let path = format!("/settings/{}", segment(key));
        Envelope::from_value(self.api.put(&path, setting).await?)
            .into_data("failed to update setting")
    }

    /// Delete by numeric id (not key)
    pub async fn delete(&self, id: i64) -> Result<()> {
        Envelope::from_value(self.api.delete(&format!("/settings/{}", id)).await?)
            .into_result("failed to delete setting")
            .map(|_| ())
    }
}
