//! HTTP implementation of the model API.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ResponsesApi, TransportError};
use crate::types::ResponsesRequest;
use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Model transport over HTTPS with bearer auth.
///
/// The api key and base URL are explicit constructor inputs; [`from_env`]
/// reads `OPENAI_API_KEY` for callers that want the conventional setup.
///
/// [`from_env`]: HttpTransport::from_env
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        // Env-overridable timeout; model turns with tool output payloads can
        // run long.
        let timeout_secs = env::var("DISCOVERY_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Construct against the default endpoint with `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| Error::configuration("OPENAI_API_KEY is not set"))?;
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url, api_key)
    }
}

#[async_trait]
impl ResponsesApi for HttpTransport {
    async fn create_response(&self, request: &ResponsesRequest) -> Result<Value> {
        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Keep the diagnostic single-line and bounded.
            let snippet: String = body
                .chars()
                .take(512)
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            return Err(Error::Transport(TransportError::Status {
                status: status.as_u16(),
                body: snippet,
            }));
        }

        let json = response
            .json()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(json)
    }
}
