//! The built-in documentation-fetch tool.

use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::TryStreamExt;
use serde_json::{json, Map, Value};

use super::{html, Tool, ToolError};

/// Hard timeout on the whole fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
/// Cap on bytes read from the response body, regardless of server behavior.
const MAX_BODY_BYTES: usize = 500_000;
/// Cap on plain-text characters reported back to the model.
const MAX_CONTENT_CHARS: usize = 20_000;

const USER_AGENT: &str = "discovery-agent/0.1 (+https://localhost)";
const ACCEPT: &str = "text/html,application/xhtml+xml,text/plain;q=0.9,*/*;q=0.8";

/// Zero-parameter tool bound to a fixed documentation URL at construction.
///
/// Fetches the page, strips HTML to plain text, and reports a possibly
/// truncated excerpt together with the original length and a truncation flag.
pub struct FetchDocumentation {
    url: String,
}

impl FetchDocumentation {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn fetch(&self) -> Result<Value, ToolError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ToolError::Fetch(e.to_string()))?;

        let response = client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await
            .map_err(|e| ToolError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Fetch(format!("HTTP status {status}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = read_capped(response).await?;
        let decoded = String::from_utf8_lossy(&body);
        let extracted = html::extract_text(&decoded);

        let content_length = extracted.text.chars().count();
        let truncated = content_length > MAX_CONTENT_CHARS;
        let content: String = if truncated {
            extracted.text.chars().take(MAX_CONTENT_CHARS).collect()
        } else {
            extracted.text
        };

        Ok(json!({
            "url": self.url.as_str(),
            "content_type": content_type,
            "title": extracted.title,
            "content": content,
            "content_length": content_length,
            "truncated": truncated,
        }))
    }
}

/// Stream the body, keeping at most [`MAX_BODY_BYTES`] and dropping the rest.
async fn read_capped(response: reqwest::Response) -> Result<Bytes, ToolError> {
    let mut body = BytesMut::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream
        .try_next()
        .await
        .map_err(|e| ToolError::Fetch(e.to_string()))?
    {
        let remaining = MAX_BODY_BYTES - body.len();
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

#[async_trait]
impl Tool for FetchDocumentation {
    fn name(&self) -> &str {
        "fetch_documentation"
    }

    fn description(&self) -> &str {
        "Fetch the predefined application documentation page. \
         Use this before creating the threat model."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false,
        })
    }

    async fn call(&self, _args: &Map<String, Value>) -> Result<Value, ToolError> {
        tracing::debug!(url = %self.url, "fetching documentation");
        self.fetch().await
    }
}
