//! Login and logout lifecycle

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use crate::common::assertions::{assert_session_cleared, authorization};
    use crate::common::fixtures;
    use crate::{assert_err, assert_ok};
    use hotel_admin_client::Role;
    use hotel_admin_client::sdk::config::DEFAULT_LOGIN_PAGE;
    use hotel_admin_client::sdk::session::{ROLE_KEY, TOKEN_KEY};
    use hotel_admin_client::sdk::{
        ApiClient, ClientError, ConfigBuilder, MemoryStorage, Session, SessionStorage,
    };
    use hotel_admin_client::ui::MemoryNavigator;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_then_authorized_listing() {
        let backend = TestBackend::start(DEFAULT_LOGIN_PAGE).await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({
                "username": "wang",
                "password": "secret",
                "role": "MANAGER"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::ok(json!({"token": "t1"}))),
            )
            .expect(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::ok(json!([fixtures::room(1, "101")]))),
            )
            .mount(&backend.server)
            .await;

        let login = assert_ok!(
            backend
                .client
                .auth()
                .login("wang", "secret", Role::Manager)
                .await
        );
        assert_eq!(login.token.as_deref(), Some("t1"));

        let auth = backend.client.auth();
        assert!(auth.is_authenticated());
        assert_eq!(auth.user_role().as_deref(), Some("MANAGER"));
        assert_eq!(auth.username().as_deref(), Some("wang"));

        let rooms = assert_ok!(backend.client.rooms().get_all().await);
        assert_eq!(rooms.len(), 1);

        let requests = backend.requests().await;
        let listing = requests
            .iter()
            .find(|r| r.url.path() == "/rooms")
            .expect("rooms request recorded");
        assert_eq!(authorization(listing).as_deref(), Some("Bearer t1"));
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_untouched() {
        let backend = TestBackend::start(DEFAULT_LOGIN_PAGE).await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::failure("用户名或密码错误")),
            )
            .mount(&backend.server)
            .await;

        let err = assert_err!(
            backend
                .client
                .auth()
                .login("wang", "wrong", Role::Receptionist)
                .await
        );
        assert!(matches!(&err, ClientError::ResourceOperationFailed(m) if m == "用户名或密码错误"));
        assert_session_cleared(&backend.session);
    }

    #[tokio::test]
    async fn test_login_without_token_fails() {
        let backend = TestBackend::start(DEFAULT_LOGIN_PAGE).await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::ok(json!({"username": "wang"}))),
            )
            .mount(&backend.server)
            .await;

        let err = assert_err!(
            backend
                .client
                .auth()
                .login("wang", "secret", Role::Manager)
                .await
        );
        assert!(matches!(err, ClientError::ResourceOperationFailed(_)));
        assert!(!backend.client.auth().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_and_redirects() {
        let backend = TestBackend::logged_in("/admin/dashboard.html", "t1", "ADMIN").await;

        assert_ok!(backend.client.auth().logout());

        assert_session_cleared(&backend.session);
        assert_eq!(
            backend.navigator.last_redirect().as_deref(),
            Some(DEFAULT_LOGIN_PAGE)
        );
        assert!(backend.requests().await.is_empty());
    }

    /// Memory store whose role writes fail
    struct RoleRejectingStorage(MemoryStorage);

    impl SessionStorage for RoleRejectingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> hotel_admin_client::Result<()> {
            if key == ROLE_KEY {
                return Err(ClientError::Storage("disk full".to_string()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> hotel_admin_client::Result<()> {
            self.0.remove(key)
        }
    }

    #[tokio::test]
    async fn test_login_with_failing_store_leaves_no_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::ok(json!({"token": "t1"}))),
            )
            .mount(&server)
            .await;

        let storage = Arc::new(RoleRejectingStorage(MemoryStorage::new()));
        let session = Session::open(storage.clone());
        let client = ApiClient::new(
            ConfigBuilder::new().base_url(&server.uri()).build(),
            session.clone(),
            Arc::new(MemoryNavigator::new(DEFAULT_LOGIN_PAGE)),
        )
        .unwrap();

        let err = assert_err!(client.auth().login("wang", "secret", Role::Manager).await);
        assert!(matches!(err, ClientError::Storage(_)));

        assert_session_cleared(&session);
        assert!(storage.get(TOKEN_KEY).is_none());
        let reopened = Session::open(storage);
        assert!(!reopened.is_authenticated());
    }
}
