//! Permission guard fed by a real login

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use crate::common::fixtures;
    use crate::assert_ok;
    use hotel_admin_client::auth::rbac::{MANAGER_OR_ABOVE, MENU_RULES};
    use hotel_admin_client::sdk::ClientError;
    use hotel_admin_client::ui::{MemoryDocument, MemoryNotifier};
    use hotel_admin_client::{PermissionGuard, Role};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    async fn login_as(backend: &TestBackend, role: Role) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::ok(json!({"token": "t1"}))),
            )
            .mount(&backend.server)
            .await;
        assert_ok!(backend.client.auth().login("op", "pw", role).await);
    }

    fn guard_for(backend: &TestBackend) -> (PermissionGuard, Arc<MemoryDocument>, Arc<MemoryNotifier>) {
        let ids: Vec<&str> = MENU_RULES.iter().map(|r| r.element_id).collect();
        let document = Arc::new(MemoryDocument::with_elements(ids));
        let notifier = Arc::new(MemoryNotifier::new());
        let guard = PermissionGuard::new(
            backend.session.clone(),
            document.clone(),
            backend.navigator.clone(),
            notifier.clone(),
        );
        (guard, document, notifier)
    }

    #[tokio::test]
    async fn test_housekeeping_login_limits_menus() {
        let backend = TestBackend::start("/admin/login.html").await;
        login_as(&backend, Role::Housekeeping).await;
        let (guard, document, _) = guard_for(&backend);

        let report = guard.hide_unauthorized_menus();

        assert!(report.missing.is_empty());
        for id in ["menu-dashboard", "menu-rooms", "menu-room-status", "menu-housekeeping"] {
            assert_eq!(document.is_visible(id), Some(true), "{} hidden", id);
        }
        for id in ["menu-users", "menu-statistics", "menu-reservations", "menu-settings"] {
            assert_eq!(document.is_visible(id), Some(false), "{} shown", id);
        }
    }

    #[tokio::test]
    async fn test_session_expiry_revokes_permissions() {
        let backend = TestBackend::start("/admin/statistics.html").await;
        login_as(&backend, Role::Manager).await;
        let (guard, _, notifier) = guard_for(&backend);
        assert!(guard.check_permission(MANAGER_OR_ABOVE, "查看统计"));

        Mock::given(method("GET"))
            .and(path("/api/statistics/today"))
            .respond_with(ResponseTemplate::new(401).set_body_json(fixtures::failure("expired")))
            .mount(&backend.server)
            .await;
        let err = backend.client.statistics().get_today().await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized(_)));

        assert!(guard.current_role().is_none());
        assert!(!guard.check_permission(MANAGER_OR_ABOVE, "查看统计"));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_page_guard_redirects_receptionist() {
        let backend = TestBackend::start("/admin/users.html").await;
        login_as(&backend, Role::Receptionist).await;
        let (guard, _, notifier) = guard_for(&backend);

        assert!(!guard.check_page_access(&[Role::Admin], Some("/dashboard")));
        assert_eq!(backend.navigator.last_redirect().as_deref(), Some("/dashboard"));
        assert!(notifier.messages()[0].contains("前台"));
    }
}
