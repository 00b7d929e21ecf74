//! The shared request primitive

use super::client::ApiClient;
use crate::sdk::errors::*;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Per-call request options
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// JSON body
    pub body: Option<Value>,
    /// Extra headers; they override `Content-Type` but not `Authorization`
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Ok(Self {
            body: Some(serde_json::to_value(body).map_err(ClientError::Encode)?),
            headers: HeaderMap::new(),
        })
    }

    /// Add a header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl ApiClient {
    /// Send a request and return the parsed body unmodified
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        let url = self.url(path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ClientError::Config(format!("Invalid bearer token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        debug!(%method, %url, "Sending API request");

        let mut builder = self
            .http_client
            .request(method.clone(), &url)
            .headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_string(body).map_err(ClientError::Encode)?);
        }

        let response = builder.send().await.map_err(|e| {
            error!("API request error: {} {}: {}", method, url, e);
            ClientError::Transport(e)
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", url, e);
            ClientError::Transport(e)
        })?;

        self.handle_response(status, &text)
    }

    /// Classify a response by body then status
    pub(crate) fn handle_response(&self, status: u16, body: &str) -> Result<Value> {
        if body.is_empty() {
            warn!(status, "Empty response body");
            return Err(ClientError::EmptyResponse);
        }

        let data: Value = serde_json::from_str(body).map_err(|_| {
            error!(status, "JSON parse failed: {}", body);
            ClientError::malformed(body)
        })?;

        if !(200..300).contains(&status) {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string);

            if status == 401 {
                self.expire_session();
            }

            let err = ClientError::from_status(status, message);
            warn!(status, "API request failed: {}", err);
            return Err(err);
        }

        Ok(data)
    }

    /// GET
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, RequestOptions::new()).await
    }

    /// POST with a JSON body
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.request(Method::POST, path, RequestOptions::json(body)?)
            .await
    }

    /// PUT with a JSON body
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.request(Method::PUT, path, RequestOptions::json(body)?)
            .await
    }

    /// DELETE
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, RequestOptions::new())
            .await
    }
}
