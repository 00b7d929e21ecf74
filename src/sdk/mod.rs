//! HotelSystem admin API SDK
//!
//! This module provides the HTTP client, its session, and one sub-client per
//! backend resource.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod resources;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use client::{ApiClient, RequestOptions};
pub use config::{ClientConfig, ClientSettings, ConfigBuilder};
pub use errors::{ClientError, Result};
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage};
pub use types::{Envelope, Page};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize default logging, honoring `RUST_LOG`
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
