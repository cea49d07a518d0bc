use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::SyncError;
use crate::result::SyncResult;

/// Default [`ApiClient`] backed by `reqwest`.
///
/// Posts `{"query": ...}` to the configured endpoint with the account token
/// in the `Authorization` header. A response without a `data` payload is a
/// transport error carrying the HTTP status; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn execute(&self, query: &str) -> SyncResult<Value> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| SyncError::Transport(format!("unreadable response body: {e}")))?;

        match body.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(SyncError::Transport(format!(
                "response carried no data payload (status {status})"
            ))),
        }
    }
}
