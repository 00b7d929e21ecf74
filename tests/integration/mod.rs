//! Integration tests for hotel-admin-client
//!
//! These tests drive the client over HTTP against a wiremock backend.

pub mod auth_tests;
pub mod client_tests;
pub mod permission_tests;
