//! HTTP client for the HotelSystem backend
//!
//! [`ApiClient`] owns the shared request primitive: URL building, bearer
//! authentication, body parsing and the cross-cutting handling of 401/403.
//! Resource sub-clients in [`crate::sdk::resources`] sit on top of it.

mod client;
mod request;


// Re-export public types and the main client
pub use client::ApiClient;
pub use request::RequestOptions;
