//! Pure permission decisions
//!
//! Every function takes the current role explicitly. A role string that is
//! not one of the known roles never matches.

use super::menus::MENU_RULES;
use super::roles::{MANAGER_OR_ABOVE, RECEPTIONIST_OR_ABOVE, Role, role_display_name};
use super::types::PermissionCheck;

/// Exact match against the current role
pub fn has_role(current: Option<&str>, role: Role) -> bool {
    current == Some(role.as_str())
}

/// Whether the current role is one of `roles`; false when no role is stored
pub fn has_any_role(current: Option<&str>, roles: &[Role]) -> bool {
    roles.iter().any(|role| has_role(current, *role))
}

pub fn is_admin(current: Option<&str>) -> bool {
    has_role(current, Role::Admin)
}

pub fn is_manager_or_above(current: Option<&str>) -> bool {
    has_any_role(current, MANAGER_OR_ABOVE)
}

pub fn is_receptionist_or_above(current: Option<&str>) -> bool {
    has_any_role(current, RECEPTIONIST_OR_ABOVE)
}

/// May the current role perform `action`
pub fn check_permission(current: Option<&str>, allowed: &[Role], action: &str) -> PermissionCheck {
    if has_any_role(current, allowed) {
        PermissionCheck::allow(current)
    } else {
        PermissionCheck::deny(
            current,
            format!(
                "权限不足：{}无法{}。请联系管理员。",
                role_display_name(current),
                action
            ),
        )
    }
}

/// May the current role open this page
pub fn check_page_access(current: Option<&str>, allowed: &[Role]) -> PermissionCheck {
    if has_any_role(current, allowed) {
        PermissionCheck::allow(current)
    } else {
        PermissionCheck::deny(
            current,
            format!("权限不足：{}无权访问此页面。", role_display_name(current)),
        )
    }
}

/// Visibility of every menu in the table for the current role
pub fn menu_visibility(current: Option<&str>) -> impl Iterator<Item = (&'static str, bool)> + '_ {
    MENU_RULES
        .iter()
        .map(move |rule| (rule.element_id, has_any_role(current, rule.roles)))
}
