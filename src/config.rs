//! Agent configuration.

use serde::{Deserialize, Serialize};

/// Default model identifier when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-5.2";

/// Fixed configuration for one agent instance.
///
/// Immutable after construction; the conversation state lives on the agent,
/// not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Documentation URL the fetch tool is bound to.
    pub docs_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// System instructions sent with every request.
    pub instructions: String,
}

impl AgentConfig {
    pub fn new(
        docs_url: impl Into<String>,
        model: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            docs_url: docs_url.into(),
            model: model.into(),
            instructions: instructions.into(),
        }
    }
}
