//! Operator roles

use std::fmt;
use std::str::FromStr;

/// Operator classification, upper-case on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Receptionist,
    Housekeeping,
}

/// Every role
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Manager,
    Role::Receptionist,
    Role::Housekeeping,
];

/// Manager and administrator
pub const MANAGER_OR_ABOVE: &[Role] = &[Role::Manager, Role::Admin];

/// Front desk, manager and administrator
pub const RECEPTIONIST_OR_ABOVE: &[Role] = &[Role::Receptionist, Role::Manager, Role::Admin];

impl Role {
    /// Wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Receptionist => "RECEPTIONIST",
            Role::Housekeeping => "HOUSEKEEPING",
        }
    }

    /// Localized (zh-CN) name shown in notices
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "管理员",
            Role::Manager => "经理",
            Role::Receptionist => "前台",
            Role::Housekeeping => "房务",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "RECEPTIONIST" => Ok(Role::Receptionist),
            "HOUSEKEEPING" => Ok(Role::Housekeeping),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Display name for a stored role; unknown roles are shown verbatim
pub fn role_display_name(role: Option<&str>) -> String {
    match role {
        Some(raw) => raw
            .parse::<Role>()
            .map(|r| r.display_name().to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => "未登录用户".to_string(),
    }
}
