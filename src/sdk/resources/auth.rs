//! Authentication

use crate::auth::rbac::Role;
use crate::sdk::client::ApiClient;
use crate::sdk::errors::{ClientError, Result};
use crate::sdk::models::{LoginRequest, LoginResponse};
use crate::sdk::types::Envelope;
use tracing::{info, warn};

/// `/auth` sub-client; also owns the session lifecycle
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    pub(crate) api: &'a ApiClient,
}

impl Auth<'_> {
    /// Log in as `role`.
    ///
    /// The session is updated only when the backend reports success and
    /// returns a token.
    pub async fn login(&self, username: &str, password: &str, role: Role) -> Result<LoginResponse> {
        let request = LoginRequest {
            username,
            password,
            role: role.as_str(),
        };
        let envelope = Envelope::from_value(self.api.post("/auth/login", &request).await?);
        let login: LoginResponse = envelope.into_data("login failed")?;

        let Some(token) = login.token.as_deref().filter(|t| !t.is_empty()) else {
            warn!("Login for {} succeeded without a token", username);
            return Err(ClientError::ResourceOperationFailed(
                "login response did not contain a token".to_string(),
            ));
        };

        self.api.set_token(Some(token))?;
        if let Err(e) = self.api.session.set_identity(role.as_str(), username) {
            warn!("Failed to store identity for {}: {}", username, e);
            if let Err(clear) = self.api.session.clear() {
                warn!("Failed to discard partial session: {}", clear);
            }
            return Err(e);
        }
        info!("Logged in as {} ({})", username, role);
        Ok(login)
    }

    /// Clear the session and go to the login page
    pub fn logout(&self) -> Result<()> {
        let cleared = self.api.session.clear();
        self.api.navigator.redirect(&self.api.config.login_page);
        info!("Logged out");
        cleared
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.session.is_authenticated()
    }

    /// Stored role string
    pub fn user_role(&self) -> Option<String> {
        self.api.session.role()
    }

    pub fn username(&self) -> Option<String> {
        self.api.session.username()
    }
}
