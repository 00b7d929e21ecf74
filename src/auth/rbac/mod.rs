//! Role-Based Access Control (RBAC) for console pages and actions
//!
//! [`policy`] holds pure decision functions that take the current role as a
//! parameter. [`PermissionGuard`] is the consumer that turns decisions into
//! visibility changes, notices and redirects.

mod guard;
mod menus;
pub mod policy;
mod roles;
mod types;

// Re-export public types and structs
pub use guard::{MenuVisibilityReport, PermissionGuard};
pub use menus::{MENU_RULES, MenuRule};
pub use roles::{ALL_ROLES, MANAGER_OR_ABOVE, RECEPTIONIST_OR_ABOVE, Role, role_display_name};
pub use types::PermissionCheck;
