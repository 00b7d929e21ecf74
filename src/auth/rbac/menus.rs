//! Navigation menu visibility table

use super::roles::Role::{self, Admin, Housekeeping, Manager, Receptionist};

/// Which roles see a navigation element
#[derive(Debug, Clone, Copy)]
pub struct MenuRule {
    /// Element id on the page
    pub element_id: &'static str,
    /// Roles allowed to see it
    pub roles: &'static [Role],
}

/// Console navigation menus
pub const MENU_RULES: &[MenuRule] = &[
    MenuRule {
        element_id: "menu-dashboard",
        roles: &[Admin, Manager, Receptionist, Housekeeping],
    },
    MenuRule {
        element_id: "menu-rooms",
        roles: &[Admin, Manager, Receptionist, Housekeeping],
    },
    MenuRule {
        element_id: "menu-room-status",
        roles: &[Admin, Manager, Receptionist, Housekeeping],
    },
    MenuRule {
        element_id: "menu-housekeeping",
        roles: &[Admin, Manager, Housekeeping],
    },
    MenuRule {
        element_id: "menu-reservations",
        roles: &[Admin, Manager, Receptionist],
    },
    MenuRule {
        element_id: "menu-frontdesk",
        roles: &[Admin, Manager, Receptionist],
    },
    MenuRule {
        element_id: "menu-guests",
        roles: &[Admin, Manager, Receptionist],
    },
    MenuRule {
        element_id: "menu-statistics",
        roles: &[Admin, Manager],
    },
    MenuRule {
        element_id: "menu-logs",
        roles: &[Admin, Manager],
    },
    MenuRule {
        element_id: "menu-settings",
        roles: &[Admin, Manager],
    },
    MenuRule {
        element_id: "menu-users",
        roles: &[Admin],
    },
];
