//! # discovery-agent
//!
//! A stateful security-discovery agent that alternates between a remote model
//! (an OpenAI Responses-style API) and a local documentation-fetch tool until
//! the model produces a final textual answer.
//!
//! ## Overview
//!
//! The agent sends the user's instruction together with the registered tool
//! schemas to the model, executes any function calls the model requests,
//! feeds the outputs back under the same conversation continuation token, and
//! returns the model's final text. Two specializations share the loop and
//! differ only in their system instructions: [`DiscoveryAgent`] emits a
//! STRIDE-derived list of MITRE ATT&CK technique identifiers as JSON, while
//! [`ThreatModelAgent`] emits threat statements following a fixed grammar.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use discovery_agent::{DiscoveryAgent, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> discovery_agent::Result<()> {
//!     let transport = Arc::new(HttpTransport::from_env()?);
//!     let mut agent = DiscoveryAgent::new(
//!         "https://docs.example.com/api",
//!         "gpt-5.2",
//!         transport,
//!     );
//!
//!     let ttps = agent.discover_ttps(Some("Acme Billing")).await?;
//!     println!("{ttps}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`agent`] | The model/tool execution loop and its two specializations |
//! | [`tools`] | Tool trait, registry/executor, and the documentation-fetch tool |
//! | [`transport`] | The model-API seam and its HTTP implementation |
//! | [`types`] | Request bodies and tolerant response accessors |
//! | [`config`] | Agent configuration |

pub mod agent;
pub mod config;
pub mod tools;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use agent::{Agent, DiscoveryAgent, ThreatModelAgent};
pub use config::AgentConfig;
pub use tools::{default_registry, FetchDocumentation, Tool, ToolError, ToolRegistry};
pub use transport::{HttpTransport, ResponsesApi};
pub use types::{FunctionCall, FunctionCallOutput, RequestInput, ResponsesRequest};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
