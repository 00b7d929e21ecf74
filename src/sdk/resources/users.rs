//! Back-office users

use crate::sdk::client::ApiClient;
use crate::sdk::errors::Result;
use crate::sdk::models::User;
use crate::sdk::types::Envelope;

/// `/users` sub-client
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Users<'_> {
    pub async fn get_all(&self) -> Result<Vec<User>> {
        Envelope::from_value(self.api.get("/users").await?)
            .into_data_or_default("failed to load users")
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        Envelope::from_value(self.api.get(&format!("/users/{}", id)).await?)
            .into_data("failed to load user")
    }

    pub async fn create(&self, user: &User) -> Result<User> {
        Envelope::from_value(self.api.post("/users", user).await?)
            .into_data("failed to create user")
    }

    pub async fn update(&self, id: i64, user: &User) -> Result<User> {
        Envelope::from_value(self.api.put(&format!("/users/{}", id), user).await?)
            .into_data("failed to update user")
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        Envelope::from_value(self.api.delete(&format!("/users/{}", id)).await?)
            .into_result("failed to delete user")
            .map(|_| ())
    }
}
