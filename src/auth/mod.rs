//! Authorization for the admin console
//!
//! Role-based decisions over the session's role, and the guard that applies
//! them to the page.

pub mod rbac;

// Re-export commonly used types
pub use rbac::{PermissionCheck, PermissionGuard, Role};
