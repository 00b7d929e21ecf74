//! Applies permission decisions to the page

use super::menus::MENU_RULES;
use super::policy;
use super::roles::Role;
use super::types::PermissionCheck;
use crate::sdk::config::DEFAULT_DASHBOARD_PAGE;
use crate::sdk::session::Session;
use crate::ui::{Document, Navigator, Notifier};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of [`PermissionGuard::hide_unauthorized_menus`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuVisibilityReport {
    pub shown: Vec<&'static str>,
    pub hidden: Vec<&'static str>,
    /// Menus in the table that the page does not have
    pub missing: Vec<&'static str>,
}

/// Session-aware permission helper for one page
pub struct PermissionGuard {
    session: Session,
    document: Arc<dyn Document>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    dashboard_page: String,
}

impl PermissionGuard {
    pub fn new(
        session: Session,
        document: Arc<dyn Document>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            document,
            navigator,
            notifier,
            dashboard_page: DEFAULT_DASHBOARD_PAGE.to_string(),
        }
    }

    /// Default target of [`Self::check_page_access`]
    pub fn with_dashboard_page(mut self, page: &str) -> Self {
        self.dashboard_page = page.to_string();
        self
    }

    /// Role as stored in the session
    pub fn current_role(&self) -> Option<String> {
        self.session.role()
    }

    pub fn has_role(&self, role: Role) -> bool {
        policy::has_role(self.session.role().as_deref(), role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        policy::has_any_role(self.session.role().as_deref(), roles)
    }

    pub fn is_admin(&self) -> bool {
        policy::is_admin(self.session.role().as_deref())
    }

    pub fn is_manager_or_above(&self) -> bool {
        policy::is_manager_or_above(self.session.role().as_deref())
    }

    pub fn is_receptionist_or_above(&self) -> bool {
        policy::is_receptionist_or_above(self.session.role().as_deref())
    }

    /// Show the element iff the session role is one of `roles`
    pub fn show_for_roles(&self, element_id: &str, roles: &[Role]) {
        if self.document.has_element(element_id) {
            self.document
                .set_visible(element_id, self.has_any_role(roles));
        }
    }

    /// Hide the element if the session role is one of `roles`
    pub fn hide_for_roles(&self, element_id: &str, roles: &[Role]) {
        if self.document.has_element(element_id) && self.has_any_role(roles) {
            self.document.set_visible(element_id, false);
        }
    }

    /// Gate an action. On denial the operator is notified and `false` is
    /// returned; the caller must abort.
    pub fn check_permission(&self, allowed: &[Role], action: &str) -> bool {
        let check = policy::check_permission(self.session.role().as_deref(), allowed, action);
        self.notify_denial(&check);
        check.granted
    }

    /// Apply [`MENU_RULES`] to the page
    pub fn hide_unauthorized_menus(&self) -> MenuVisibilityReport {
        let role = self.session.role();
        let mut report = MenuVisibilityReport::default();

        for rule in MENU_RULES {
            if !self.document.has_element(rule.element_id) {
                debug!("Menu element not found: {}", rule.element_id);
                report.missing.push(rule.element_id);
                continue;
            }

            let visible = policy::has_any_role(role.as_deref(), rule.roles);
            self.document.set_visible(rule.element_id, visible);
            if visible {
                report.shown.push(rule.element_id);
            } else {
                report.hidden.push(rule.element_id);
            }
        }

        debug!(
            shown = report.shown.len(),
            hidden = report.hidden.len(),
            missing = report.missing.len(),
            "Menu visibility applied"
        );
        report
    }

    /// Guard a whole page. On denial the operator is notified and sent to
    /// `redirect` (or the dashboard page).
    pub fn check_page_access(&self, allowed: &[Role], redirect: Option<&str>) -> bool {
        let check = policy::check_page_access(self.session.role().as_deref(), allowed);
        if check.granted {
            return true;
        }

        self.notify_denial(&check);
        let target = redirect.unwrap_or(self.dashboard_page.as_str());
        info!("Page access denied, redirecting to {}", target);
        self.navigator.redirect(target);
        false
    }

    fn notify_denial(&self, check: &PermissionCheck) {
        if let Some(reason) = &check.denial_reason {
            self.notifier.notify(reason);
        }
    }
}
