//! Client configuration

use crate::sdk::errors::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
/// Location the client redirects to on 401 and logout
pub const DEFAULT_LOGIN_PAGE: &str = "/admin/login.html";
/// Default target for denied page access
pub const DEFAULT_DASHBOARD_PAGE: &str = "/admin/dashboard.html";

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8081`
    pub base_url: String,
    /// Login page location
    pub login_page: String,
    /// Dashboard page location
    pub dashboard_page: String,
    /// File backing the persisted session (CLI only)
    pub session_file: Option<PathBuf>,
    /// Settings
    pub settings: ClientSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
            dashboard_page: DEFAULT_DASHBOARD_PAGE.to_string(),
            session_file: None,
            settings: ClientSettings::default(),
        }
    }
}

/// Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Request timeout in seconds; `None` leaves requests unbounded
    pub timeout: Option<u64>,
    /// User agent header
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("hotel-admin-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Configuration
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Backend origin
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Login page location
    pub fn login_page(mut self, page: &str) -> Self {
        self.config.login_page = page.to_string();
        self
    }

    /// Dashboard page location
    pub fn dashboard_page(mut self, page: &str) -> Self {
        self.config.dashboard_page = page.to_string();
        self
    }

    /// Session file
    pub fn session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.session_file = Some(path.into());
        self
    }

    /// Settings
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.settings.timeout = Some(timeout);
        self
    }

    /// Settings
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.settings.user_agent = user_agent.to_string();
        self
    }

    /// Configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading client configuration from environment");
        let mut builder = ConfigBuilder::new();

        if let Some(base_url) = lookup("HOTEL_API_BASE_URL") {
            builder = builder.base_url(&base_url);
        }
        if let Some(timeout) = lookup("HOTEL_API_TIMEOUT") {
            let timeout = timeout.parse().map_err(|e| {
                ClientError::Config(format!("Invalid HOTEL_API_TIMEOUT: {}", e))
            })?;
            builder = builder.timeout(timeout);
        }
        if let Some(page) = lookup("HOTEL_LOGIN_PAGE") {
            builder = builder.login_page(&page);
        }
        if let Some(page) = lookup("HOTEL_DASHBOARD_PAGE") {
            builder = builder.dashboard_page(&page);
        }
        if let Some(path) = lookup("HOTEL_SESSION_FILE") {
            builder = builder.session_file(path);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Configuration
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            ClientError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) origin
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            ClientError::Config(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "Unsupported URL scheme: {}",
                url.scheme()
            )));
        }
        if let Some(0) = self.settings.timeout {
            return Err(ClientError::Config("Timeout must be positive".to_string()));
        }
        Ok(())
    }
}
