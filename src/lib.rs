//! # hotel-admin-client
//!
//! API client and role-based UI permission helper for the HotelSystem admin
//! console.
//!
//! ## Features
//!
//! - **Uniform envelope handling**: every backend call goes through one request
//!   primitive and one `{success, data, message}` normalization boundary
//! - **Session management**: bearer token, role and username persisted in a
//!   pluggable key-value store
//! - **Typed sub-clients**: rooms, reservations, front desk, guests, users,
//!   statistics, operation logs, system settings
//! - **RBAC helper**: pure role decisions plus a guard that shows/hides menus,
//!   gates actions and protects pages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotel_admin_client::{ApiClient, ClientConfig, Role, Session};
//! use hotel_admin_client::ui::MemoryNavigator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::in_memory();
//!     let client = ApiClient::new(
//!         ClientConfig::default(),
//!         session.clone(),
//!         Arc::new(MemoryNavigator::default()),
//!     )?;
//!
//!     client.auth().login("manager", "secret", Role::Manager).await?;
//!     for room in client.rooms().get_all().await? {
//!         println!("{:?} {:?}", room.room_number, room.status);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod sdk;
pub mod ui;

// Re-export main types
pub use auth::rbac::{PermissionCheck, PermissionGuard, Role};
pub use sdk::{
    ApiClient, ClientConfig, ClientError, ConfigBuilder, Envelope, Result, Session, init,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
