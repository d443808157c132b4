//! The agent execution loop.
//!
//! [`Agent`] owns one conversation: it sends the user's instruction plus the
//! registered tool schemas to the model, executes any function calls the
//! response requests, feeds the outputs back under the response's id as the
//! new continuation token, and returns the model's final text.

pub mod discovery;
pub mod prompts;

pub use discovery::{DiscoveryAgent, ThreatModelAgent};

use std::sync::Arc;

use serde_json::Value;

use crate::config::AgentConfig;
use crate::tools::{default_registry, ToolRegistry};
use crate::transport::ResponsesApi;
use crate::types::{response, FunctionCallOutput, RequestInput, ResponsesRequest};
use crate::{Error, Result};

/// One conversational agent instance.
///
/// Not safe for concurrent use: the continuation token is mutable state, so
/// `ask` takes `&mut self` and one logical conversation belongs to one
/// instance, used sequentially.
pub struct Agent {
    config: AgentConfig,
    registry: ToolRegistry,
    schemas: Vec<Value>,
    transport: Arc<dyn ResponsesApi>,
    previous_response_id: Option<String>,
    max_tool_rounds: Option<usize>,
}

impl Agent {
    /// Build an agent with the built-in registry (the documentation-fetch
    /// tool bound to `config.docs_url`).
    pub fn new(config: AgentConfig, transport: Arc<dyn ResponsesApi>) -> Self {
        let registry = default_registry(config.docs_url.clone());
        Self::with_registry(config, registry, transport)
    }

    /// Build an agent over a caller-supplied registry.
    pub fn with_registry(
        config: AgentConfig,
        registry: ToolRegistry,
        transport: Arc<dyn ResponsesApi>,
    ) -> Self {
        let schemas = registry.export_schemas();
        Self {
            config,
            registry,
            schemas,
            transport,
            previous_response_id: None,
            max_tool_rounds: None,
        }
    }

    /// Cap the number of model/tool round trips per `ask`. Unbounded by
    /// default; exceeding the cap fails the `ask` with
    /// [`Error::ToolRoundsExceeded`].
    pub fn with_max_tool_rounds(mut self, limit: usize) -> Self {
        self.max_tool_rounds = Some(limit);
        self
    }

    /// Clear the continuation token, starting a new session on the next
    /// `ask`. The registry and configuration are unaffected.
    pub fn reset(&mut self) {
        self.previous_response_id = None;
    }

    /// Run one question to completion.
    ///
    /// Executes function calls sequentially in response order, batching their
    /// outputs into a single continuation request, until a response with no
    /// function calls arrives. Returns the extracted final text, or `"[]"`
    /// when the response carries no text at all. Only model-transport
    /// failures escape; tool failures come back to the model as error
    /// outcomes.
    pub async fn ask(&mut self, user_input: &str) -> Result<String> {
        let mut response = self
            .create_response(
                RequestInput::Text(user_input.to_string()),
                self.previous_response_id.clone(),
            )
            .await?;

        let mut rounds = 0usize;
        loop {
            let calls = response::function_calls(&response);
            if calls.is_empty() {
                // No id means no continuity was established by this turn;
                // keep the prior token in that case.
                if let Some(id) = response::response_id(&response) {
                    self.previous_response_id = Some(id);
                }
                let answer = response::output_text(&response);
                return Ok(if answer.is_empty() { "[]".to_string() } else { answer });
            }

            rounds += 1;
            if let Some(limit) = self.max_tool_rounds {
                if rounds > limit {
                    return Err(Error::ToolRoundsExceeded { limit });
                }
            }
            tracing::debug!(round = rounds, calls = calls.len(), "executing tool calls");

            let mut outputs = Vec::with_capacity(calls.len());
            for call in &calls {
                let output = self.registry.execute(&call.name, &call.arguments).await;
                outputs.push(FunctionCallOutput::new(&call.call_id, output));
            }

            response = self
                .create_response(
                    RequestInput::ToolOutputs(outputs),
                    response::response_id(&response),
                )
                .await?;
        }
    }

    async fn create_response(
        &self,
        input: RequestInput,
        previous_response_id: Option<String>,
    ) -> Result<Value> {
        let request = ResponsesRequest {
            model: self.config.model.clone(),
            instructions: self.config.instructions.clone(),
            input,
            tools: self.schemas.clone(),
            previous_response_id,
        };
        self.transport.create_response(&request).await
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut AgentConfig {
        &mut self.config
    }
}
