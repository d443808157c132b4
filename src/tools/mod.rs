//! Tool trait, registry, and executor.
//!
//! The registry maps tool names to implementations and exports their
//! model-facing schemas. [`ToolRegistry::execute`] is a total function: every
//! outcome, success or failure, comes back as a JSON string the agent loop
//! can hand to the model, so a garbled tool call never aborts a conversation.

pub mod fetch;
pub mod html;

pub use fetch::FetchDocumentation;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Domain-level tool failure, converted to an `{"error": ...}` outcome by the
/// executor.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to fetch documentation URL: {0}")]
    Fetch(String),
}

/// A tool the model can call.
///
/// `parameters` must be a JSON schema with `additionalProperties: false`;
/// the exported declaration is marked `strict` so the model sends exactly the
/// declared shape. Handlers always receive a well-formed argument object:
/// the executor validates the raw argument string before `call` runs.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    /// Shown to the model.
    fn description(&self) -> &str;

    /// JSON schema for the accepted arguments.
    fn parameters(&self) -> Value;

    async fn call(&self, args: &Map<String, Value>) -> Result<Value, ToolError>;
}

/// Named tool definitions, iterated in insertion order.
///
/// Read-mostly after construction; may be shared read-only across agent
/// instances.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. Name collisions overwrite in place (last write wins), so
    /// the export order stays stable.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            *existing = tool;
        } else {
            self.tools.push(tool);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Model-facing declarations for every registered tool, in insertion
    /// order.
    pub fn export_schemas(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "name": tool.name(),
                    "description": tool.description(),
                    "parameters": tool.parameters(),
                    "strict": true,
                })
            })
            .collect()
    }

    /// Dispatch one tool call. Never fails: every branch returns a JSON
    /// string, either the handler's value or an `{"error": ...}` object.
    pub async fn execute(&self, name: &str, arguments: &str) -> String {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            return error_outcome(format!("unknown tool: {name}"));
        };

        let parsed: Value = match serde_json::from_str(arguments) {
            Ok(value) => value,
            Err(_) => return error_outcome("tool arguments are not valid JSON"),
        };
        let Value::Object(args) = parsed else {
            return error_outcome("tool arguments must be a JSON object");
        };

        match tool.call(&args).await {
            Ok(value) => value.to_string(),
            Err(err) => {
                tracing::warn!(tool = name, error = %err, "tool call failed");
                error_outcome(err.to_string())
            }
        }
    }
}

fn error_outcome(message: impl Into<String>) -> String {
    let message: String = message.into();
    json!({ "error": message }).to_string()
}

/// The built-in registry: just the documentation-fetch tool, bound to
/// `docs_url`.
pub fn default_registry(docs_url: impl Into<String>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(FetchDocumentation::new(docs_url)));
    registry
}
