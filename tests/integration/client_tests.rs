//! Request construction and response classification

#[cfg(test)]
mod tests {
    use crate::common::TestBackend;
    use crate::common::assertions::{assert_session_cleared, authorization};
    use crate::common::fixtures;
    use crate::{assert_err, assert_ok};
    use hotel_admin_client::sdk::config::DEFAULT_LOGIN_PAGE;
    use hotel_admin_client::sdk::session::{ROLE_KEY, TOKEN_KEY, USERNAME_KEY};
    use hotel_admin_client::sdk::{ClientError, RequestOptions, SessionStorage};
    use reqwest::Method;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    // ==================== Headers ====================

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(json!([]))))
            .mount(&backend.server)
            .await;

        assert_ok!(backend.client.get("/rooms").await);

        let requests = backend.requests().await;
        assert_eq!(requests.len(), 1);
        assert!(authorization(&requests[0]).is_none());
    }

    #[tokio::test]
    async fn test_bearer_token_sent_after_set_token() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .and(header("authorization", "Bearer abc"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(json!([]))))
            .expect(1)
            .mount(&backend.server)
            .await;

        backend.client.set_token(Some("abc")).unwrap();
        assert_eq!(backend.storage.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_ok!(backend.client.get("/rooms").await);
    }

    #[tokio::test]
    async fn test_clearing_token_stops_header() {
        let backend = TestBackend::logged_in("/admin/rooms.html", "abc", "ADMIN").await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(json!([]))))
            .mount(&backend.server)
            .await;

        backend.client.set_token(None).unwrap();
        assert_ok!(backend.client.get("/users").await);

        let requests = backend.requests().await;
        assert!(authorization(&requests[0]).is_none());
        assert!(backend.storage.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_caller_headers_and_body_are_sent() {
        let backend = TestBackend::start("/admin/settings.html").await;
        Mock::given(method("PUT"))
            .and(path("/settings/hotel.name"))
            .and(header("x-request-source", "console"))
            .and(body_json(json!({"value": "海景酒店"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(json!({}))))
            .expect(1)
            .mount(&backend.server)
            .await;

        let options = RequestOptions::json(&json!({"value": "海景酒店"}))
            .unwrap()
            .header(
                reqwest::header::HeaderName::from_static("x-request-source"),
                reqwest::header::HeaderValue::from_static("console"),
            );
        assert_ok!(
            backend
                .client
                .request(Method::PUT, "/settings/hotel.name", options)
                .await
        );
    }

    // ==================== Body classification ====================

    #[tokio::test]
    async fn test_empty_body_is_empty_response() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        Mock::given(method("DELETE"))
            .and(path("/rooms/7"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.delete("/rooms/7").await);
        assert!(matches!(err, ClientError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_html_body_is_malformed_response() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(
                ResponseTemplate::new(502).set_body_string("<html><body>Bad Gateway</body></html>"),
            )
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.rooms().get_all().await);
        match err {
            ClientError::MalformedResponse { snippet } => {
                assert!(snippet.starts_with("<html>"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_body_returned_unchanged() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        let body = json!({"success": true, "data": [1, 2], "extra": "kept"});
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&backend.server)
            .await;

        assert_eq!(assert_ok!(backend.client.get("/rooms").await), body);
    }

    // ==================== Status classification ====================

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let backend = TestBackend::logged_in("/admin/rooms.html", "expired", "MANAGER").await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(ResponseTemplate::new(401).set_body_json(fixtures::failure("登录已过期")))
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.rooms().get_all().await);
        assert!(matches!(&err, ClientError::Unauthorized(m) if m == "登录已过期"));
        assert!(err.is_auth_error());

        assert_session_cleared(&backend.session);
        for key in [TOKEN_KEY, ROLE_KEY, USERNAME_KEY] {
            assert!(backend.storage.get(key).is_none(), "{} still stored", key);
        }
        assert_eq!(
            backend.navigator.last_redirect().as_deref(),
            Some(DEFAULT_LOGIN_PAGE)
        );
    }

    #[tokio::test]
    async fn test_unauthorized_on_login_page_stays_put() {
        let backend = TestBackend::logged_in(DEFAULT_LOGIN_PAGE, "expired", "ADMIN").await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.get("/rooms").await);
        assert!(matches!(err, ClientError::Unauthorized(_)));
        assert_session_cleared(&backend.session);
        assert!(backend.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let backend = TestBackend::logged_in("/admin/users.html", "t1", "RECEPTIONIST").await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(403).set_body_json(fixtures::failure("无权访问")))
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.users().get_all().await);
        assert!(matches!(&err, ClientError::Forbidden(m) if m == "无权访问"));
        assert_eq!(backend.storage.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(backend.session.role().as_deref(), Some("RECEPTIONIST"));
        assert!(backend.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_message_is_surfaced() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        Mock::given(method("POST"))
            .and(path("/rooms"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(fixtures::failure("房间号已存在")),
            )
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.post("/rooms", &json!({"roomNumber": "101"})).await);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "房间号已存在");
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_status() {
        let backend = TestBackend::start("/admin/rooms.html").await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
            .mount(&backend.server)
            .await;

        let err = assert_err!(backend.client.get("/rooms").await);
        assert_eq!(err.to_string(), "request failed (500)");
    }
}
