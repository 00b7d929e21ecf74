//! Error handling

use thiserror::Error;

/// Message used for 401/403 responses that carry no message of their own
pub const DEFAULT_AUTH_MESSAGE: &str = "insufficient permission or session expired";

/// Maximum number of characters of a malformed body kept for diagnostics
pub const MALFORMED_SNIPPET_LEN: usize = 100;

/// Errors surfaced by the API client and its resource sub-clients
///
/// User-facing variants display their message verbatim, so UI code can show
/// `err.to_string()` directly.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with an empty body
    #[error("empty response body")]
    EmptyResponse,

    /// The body was not valid JSON
    #[error("malformed response: {snippet}")]
    MalformedResponse {
        /// Leading characters of the raw body
        snippet: String,
    },

    /// HTTP 401; the session has already been cleared
    #[error("{0}")]
    Unauthorized(String),

    /// HTTP 403
    #[error("{0}")]
    Forbidden(String),

    /// Any other non-2xx status
    #[error("{message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Server-supplied or generic message
        message: String,
    },

    /// The envelope reported `success: false`
    #[error("{0}")]
    ResourceOperationFailed(String),

    /// Connection refused, DNS failure, broken body stream...
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The envelope payload did not match the resource model
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request body could not be serialized
    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    /// The session store could not be written
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Build the error for a non-2xx response
    pub(crate) fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ClientError::Unauthorized(
                message.unwrap_or_else(|| DEFAULT_AUTH_MESSAGE.to_string()),
            ),
            403 => ClientError::Forbidden(
                message.unwrap_or_else(|| DEFAULT_AUTH_MESSAGE.to_string()),
            ),
            _ => ClientError::RequestFailed {
                status,
                message: message.unwrap_or_else(|| format!("request failed ({})", status)),
            },
        }
    }

    /// Build a malformed-response error, keeping a bounded prefix of the body
    pub(crate) fn malformed(body: &str) -> Self {
        ClientError::MalformedResponse {
            snippet: body.chars().take(MALFORMED_SNIPPET_LEN).collect(),
        }
    }

    /// Authentication or authorization failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized(_) | ClientError::Forbidden(_)
        )
    }

    /// HTTP status associated with the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::RequestFailed { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
