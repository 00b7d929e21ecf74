//! Core API client implementation

use crate::sdk::{config::ClientConfig, errors::*, session::Session};
use crate::ui::Navigator;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Authenticated client for the admin API
pub struct ApiClient {
    pub(crate) config: ClientConfig,
    pub(crate) http_client: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) navigator: Arc<dyn Navigator>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    /// Create a client bound to `session`
    pub fn new(
        config: ClientConfig,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(&config.settings.user_agent);
        if let Some(timeout) = config.settings.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!("ApiClient created for {}", config.base_url);

        Ok(Self {
            config,
            http_client,
            session,
            navigator,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session this client reads its token from
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Current bearer token
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Store or clear the bearer token
    pub fn set_token(&self, token: Option<&str>) -> Result<()> {
        self.session.set_token(token)
    }

    /// Absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send the view to the login page unless it is already there
    pub(crate) fn redirect_to_login(&self) {
        let login_page = &self.config.login_page;
        if self.navigator.current_path() != *login_page {
            self.navigator.redirect(login_page);
        }
    }

    /// Forget the session after the server rejected our credentials
    pub(crate) fn expire_session(&self) {
        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session after 401: {}", e);
        }
        self.redirect_to_login();
    }
}
