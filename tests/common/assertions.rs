//! Custom test assertions

use hotel_admin_client::sdk::Session;
use wiremock::Request;

/// Assert the session holds nothing
pub fn assert_session_cleared(session: &Session) {
    let state = session.snapshot();
    assert!(state.token.is_none(), "token still set: {:?}", state.token);
    assert!(state.role.is_none(), "role still set: {:?}", state.role);
    assert!(
        state.username.is_none(),
        "username still set: {:?}",
        state.username
    );
}

/// Value of the Authorization header, if sent
pub fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
