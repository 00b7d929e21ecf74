//! Common test utilities for hotel-admin-client
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{TestBackend, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let backend = TestBackend::start("/admin/rooms.html").await;
//!     // mount mocks on backend.server, call backend.client
//! }
//! ```

pub mod assertions;
pub mod backend;

// Re-export commonly used items
pub use backend::TestBackend;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
