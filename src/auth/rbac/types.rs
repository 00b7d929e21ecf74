//! RBAC type definitions

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role the decision was made for
    pub role: Option<String>,
    /// User-facing notice (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(crate) fn allow(role: Option<&str>) -> Self {
        Self {
            granted: true,
            role: role.map(str::to_string),
            denial_reason: None,
        }
    }

    pub(crate) fn deny(role: Option<&str>, reason: String) -> Self {
        Self {
            granted: false,
            role: role.map(str::to_string),
            denial_reason: Some(reason),
        }
    }
}
