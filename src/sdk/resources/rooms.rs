//! Rooms

use super::{query, segment};
use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::{Room, RoomStatus};
use crate::sdk::types::Envelope;

/// `/rooms` sub-client
#[derive(Debug, Clone, Copy)]
pub struct Rooms<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Rooms<'_> {
    pub async fn get_all(&self) -> Result<Vec<Room>> {
        Envelope::from_value(self.api.get("/rooms").await?)
            .into_data_or_default("failed to load rooms")
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Room> {
        Envelope::from_value(self.api.get(&format!("/rooms/{}", id)).await?)
            .into_data("failed to load room")
    }

    pub async fn create(&self, room: &Room) -> Result<Room> {
        Envelope::from_value(self.api.post("/rooms", room).await?)
            .into_data("failed to create room")
    }

    pub async fn update(&self, id: i64, room: &Room) -> Result<Room> {
        Envelope::from_value(self.api.put(&format!("/rooms/{}", id), room).await?)
            .into_data("failed to update room")
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Envelope::from_value(self.api.delete(&format!("/rooms/{}", id)).await?)
            .into_result("failed to delete room")
            .map(|_| ())
    }

    /// Rooms free for the given stay; both dates are optional
    pub async fn get_available(
        &self,
        check_in: Option<chrono::NaiveDate>,
        check_out: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Room>> {
        let params = [("checkIn", check_in), ("checkOut", check_out)]
            .into_iter()
            .filter_map(|(k, d)| d.map(|d| (k, crate::sdk::models::iso_date(d))));
        let path = format!("/rooms/available{}", query(params));
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load available rooms")
    }

    pub async fn get_by_type(&self, room_type: &str) -> Result<Vec<Room>> {
        let path = format!("/rooms/type/{}", segment(room_type));
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to load rooms by type")
    }

    pub async fn get_active(&self) -> Result<Vec<Room>> {
        Envelope::from_value(self.api.get("/rooms/active").await?)
            .into_data_or_default("failed to load active rooms")
    }

    pub async fn update_status(&self, id: i64, status: RoomStatus) -> Result<Room> {
        let path = format!("/rooms/{}/status{}", id, query([("status", status.as_str())]));
        Envelope::from_value(self.api.put(&path, &serde_json::json!({})).await?)
            .into_data("failed to update room status")
    }
}
