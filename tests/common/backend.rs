//! Mock HotelSystem backend

use hotel_admin_client::sdk::{ApiClient, ConfigBuilder, MemoryStorage, Session};
use hotel_admin_client::ui::MemoryNavigator;
use std::sync::Arc;
use wiremock::MockServer;

/// A wiremock server with a client pointed at it
pub struct TestBackend {
    pub server: MockServer,
    pub client: ApiClient,
    pub session: Session,
    pub storage: Arc<MemoryStorage>,
    pub navigator: Arc<MemoryNavigator>,
}

impl TestBackend {
    /// Start a server; the console is on `page`
    pub async fn start(page: &str) -> Self {
        let server = MockServer::start().await;
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::open(storage.clone());
        let navigator = Arc::new(MemoryNavigator::new(page));
        let config = ConfigBuilder::new().base_url(&server.uri()).timeout(5).build();
        let client = ApiClient::new(config, session.clone(), navigator.clone())
            .expect("client should build for mock server");

        Self {
            server,
            client,
            session,
            storage,
            navigator,
        }
    }

    /// Start a server with a logged-in session
    pub async fn logged_in(page: &str, token: &str, role: &str) -> Self {
        let backend = Self::start(page).await;
        backend.session.set_token(Some(token)).unwrap();
        backend.session.set_identity(role, "tester").unwrap();
        backend
    }

    /// Requests the server has seen so far
    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled by default")
    }
}
