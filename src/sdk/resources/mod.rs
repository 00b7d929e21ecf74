//! Resource sub-clients
//!
//! Each sub-client borrows the [`ApiClient`], builds a fixed path, and unwraps
//! the response envelope with a resource-specific fallback message.

mod auth;
mod guests;
mod logs;
mod reservations;
mod rooms;
mod settings;
mod statistics;
mod users;

pub use auth::Auth;
pub use guests::Guests;
pub use logs::Logs;
pub use reservations::Reservations;
pub use rooms::Rooms;
pub use settings::Settings;
pub use statistics::StatisticsApi;
pub use users::Users;

use crate::sdk::client::ApiClient;
use std::borrow::Cow;

impl ApiClient {
    /// Login and logout
    pub fn auth(&self) -> Auth<'_> {
        Auth { api: self }
    }

    pub fn rooms(&self) -> Rooms<'_> {
        Rooms { api: self }
    }

    /// Reservations plus front-desk check-in/check-out
    pub fn reservations(&self) -> Reservations<'_> {
        Reservations { api: self }
    }

    pub fn statistics(&self) -> StatisticsApi<'_> {
        StatisticsApi { api: self }
    }

    pub fn guests(&self) -> Guests<'_> {
        Guests { api: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { api: self }
    }

    /// Operation (audit) logs
    pub fn logs(&self) -> Logs<'_> {
        Logs { api: self }
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings { api: self }
    }
}

/// Percent-encode a free-text path segment
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Build `?k=v&...`, percent-encoding every value; empty for no pairs
pub(crate) fn query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let encoded: Vec<String> = pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), urlencoding::encode(v.as_ref())))
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}
