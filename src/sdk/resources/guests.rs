//! Guests

use super::query;
use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::Guest;
use crate::sdk::types::Envelope;

/// `/guests` sub-client
#[derive(Debug, Clone, Copy)]
pub struct Guests<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Guests<'_> {
    pub async fn get_all(&self) -> Result<Vec<Guest>> {
        Envelope::from_value(self.api.get("/guests").await?)
            .into_data_or_default("failed to load guests")
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Guest> {
        Envelope::from_value(self.api.get(&format!("/guests/{}", id)).await?)
            .into_data("failed to load guest")
    }

    pub async fn create(&self, guest: &Guest) -> Result<Guest> {
        Envelope::from_value(self.api.post("/guests", guest).await?)
            .into_data("failed to create guest")
    }

    pub async fn update(&self, id: i64, guest: &Guest) -> Result<Guest> {
        Envelope::from_value(self.api.put(&format!("/guests/{}", id), guest).await?)
            .into_data("failed to update guest")
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Envelope::from_value(self.api.delete(&format!("/guests/{}", id)).await?)
            .into_result("failed to delete guest")
            .map(|_| ())
    }

    /// Substring match on full name
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Guest>> {
        let path = format!("/guests/search/name{}", query([("name", name)]));
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to search guests")
    }

    pub async fn search_by_phone(&self, phone: &str) -> Result<Vec<Guest>> {
        let path = format!("/guests/search/phone{}", query([("phone", phone)]));
        Envelope::from_value(self.api.get(&path).await?)
            .into_data_or_default("failed to search guests")
    }

    /// Exact match on ID card number
    pub async fn search_by_id_card(&self, id_card_number: &str) -> Result<Guest> {
        let path = format!(
            "/guests/search/id-card{}",
            query([("idCardNumber", id_card_number)])
        );
        Envelope::from_value(self.api.get(&path).await?)
            .into_data("no guest found for this ID card number")
    }
}
