//! The model-API seam.
//!
//! The agent never constructs its own model client; it receives a
//! [`ResponsesApi`] implementation at construction. [`HttpTransport`] is the
//! production implementation; tests script their own.

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::types::ResponsesRequest;
use crate::Result;

/// A Responses-style model API: one request in, one untyped response out.
///
/// Responses are handed back as raw `serde_json::Value`; the accessors in
/// [`crate::types::response`] tolerate whatever shape arrives.
#[async_trait]
pub trait ResponsesApi: Send + Sync {
    async fn create_response(&self, request: &ResponsesRequest) -> Result<Value>;
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Other(String),
}
