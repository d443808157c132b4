//! The two built-in specializations of the execution loop.
//!
//! Both share [`Agent`] unchanged and differ only in configuration: the
//! system instructions and the convenience prompt each one builds.

use std::sync::Arc;

use super::prompts;
use super::Agent;
use crate::config::AgentConfig;
use crate::transport::ResponsesApi;
use crate::Result;

/// Emits a STRIDE-derived list of MITRE ATT&CK techniques as a JSON array of
/// `{ttp_id, ttp_name, stride, rationale}` objects.
pub struct DiscoveryAgent {
    agent: Agent,
}

impl DiscoveryAgent {
    pub fn new(
        docs_url: impl Into<String>,
        model: impl Into<String>,
        transport: Arc<dyn ResponsesApi>,
    ) -> Self {
        let config = AgentConfig::new(docs_url, model, prompts::DISCOVERY_INSTRUCTIONS);
        Self {
            agent: Agent::new(config, transport),
        }
    }

    /// Override the system instructions, keeping everything else.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.agent.config_mut().instructions = instructions.into();
        self
    }

    /// Run the default discovery prompt, optionally scoped to an application
    /// name.
    pub async fn discover_ttps(&mut self, app_name: Option<&str>) -> Result<String> {
        match app_name {
            Some(name) => {
                let prompt = format!(
                    "{} Application name: {}. \
                     Focus on practical attacker behavior and likely abuse paths.",
                    prompts::DEFAULT_DISCOVERY_PROMPT,
                    name
                );
                self.agent.ask(&prompt).await
            }
            None => self.agent.ask(prompts::DEFAULT_DISCOVERY_PROMPT).await,
        }
    }

    pub async fn ask(&mut self, user_input: &str) -> Result<String> {
        self.agent.ask(user_input).await
    }

    pub fn reset(&mut self) {
        self.agent.reset();
    }
}

/// Emits freeform threat statements following the fixed threat grammar
/// (source / prerequisites / action / impact / assets, optionally extended
/// with the impacted CIA goal).
pub struct ThreatModelAgent {
    agent: Agent,
}

impl ThreatModelAgent {
    pub fn new(
        docs_url: impl Into<String>,
        model: impl Into<String>,
        transport: Arc<dyn ResponsesApi>,
    ) -> Self {
        let config = AgentConfig::new(docs_url, model, prompts::THREAT_MODEL_INSTRUCTIONS);
        Self {
            agent: Agent::new(config, transport),
        }
    }

    /// Override the system instructions, keeping everything else.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.agent.config_mut().instructions = instructions.into();
        self
    }

    /// Run the default threat-model prompt, optionally scoped to an
    /// application name.
    pub async fn model_threats(&mut self, app_name: Option<&str>) -> Result<String> {
        match app_name {
            Some(name) => {
                let prompt = format!(
                    "{} Application name: {}. \
                     Focus on realistic abuse paths and practical impacts.",
                    prompts::DEFAULT_THREAT_MODEL_PROMPT,
                    name
                );
                self.agent.ask(&prompt).await
            }
            None => self.agent.ask(prompts::DEFAULT_THREAT_MODEL_PROMPT).await,
        }
    }

    pub async fn ask(&mut self, user_input: &str) -> Result<String> {
        self.agent.ask(user_input).await
    }

    pub fn reset(&mut self) {
        self.agent.reset();
    }
}
