//! Response envelope and shared wire types

use crate::sdk::errors::{ClientError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// The `{success, data, message}` shape produced by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the operation succeeded
    pub success: bool,
    /// Resource payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Failure (or informational) message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Normalize a parsed response body.
    ///
    /// Objects carrying a boolean `success` are read as envelopes. Anything
    /// else (a raw array, a bare object, a primitive) is taken as the payload
    /// of a successful call. `null` becomes a success without data.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self {
                success: true,
                data: None,
                message: None,
            },
            Value::Object(mut map) if map.get("success").is_some_and(Value::is_boolean) => {
                let success = map.remove("success").and_then(|v| v.as_bool()).unwrap_or(false);
                let data = map.remove("data").filter(|v| !v.is_null());
                let message = match map.remove("message") {
                    Some(Value::String(s)) => Some(s),
                    _ => None,
                };
                Self {
                    success,
                    data,
                    message,
                }
            }
            other => Self {
                success: true,
                data: Some(other),
                message: None,
            },
        }
    }

    /// Payload of a successful envelope, if any
    pub fn into_result(self, fallback: &str) -> Result<Option<Value>> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            warn!("Resource operation failed: {}", message);
            Err(ClientError::ResourceOperationFailed(message))
        }
    }

    /// Decode the payload; a missing payload is an operation failure
    pub fn into_data<T: DeserializeOwned>(self, fallback: &str) -> Result<T> {
        match self.into_result(fallback)? {
            Some(data) => Ok(serde_json::from_value(data)?),
            None => Err(ClientError::ResourceOperationFailed(fallback.to_string())),
        }
    }

    /// Decode the payload, using `T::default()` when it is absent
    pub fn into_data_or_default<T: DeserializeOwned + Default>(self, fallback: &str) -> Result<T> {
        match self.into_result(fallback)? {
            Some(data) => Ok(serde_json::from_value(data)?),
            None => Ok(T::default()),
        }
    }
}

/// Spring Data page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total number of items
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    /// Page size
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}
