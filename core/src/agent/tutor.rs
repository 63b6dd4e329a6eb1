//! The tutor agent: two fixed prompts bound to one model client

use super::prompt::{
    EXPLAIN_SYSTEM_PROMPT, EXPLAIN_USER_TEMPLATE, QCM_SYSTEM_PROMPT, QCM_USER_TEMPLATE,
};
use crate::config::ModelConfig;
use crate::error::Result;
use crate::llm::{LlmClient, OllamaClient};
use handlebars::Handlebars;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Operations the agent exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Explain a concept
    Explain,
    /// Write one multiple-choice question
    CreateQcm,
}

impl Operation {
    /// Stable name, also used as the template key
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Explain => "explain",
            Operation::CreateQcm => "createQcm",
        }
    }

    /// System instruction sent with this operation
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Operation::Explain => EXPLAIN_SYSTEM_PROMPT,
            Operation::CreateQcm => QCM_SYSTEM_PROMPT,
        }
    }

    fn user_template(&self) -> &'static str {
        match self {
            Operation::Explain => EXPLAIN_USER_TEMPLATE,
            Operation::CreateQcm => QCM_USER_TEMPLATE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent answering revision requests through an [`LlmClient`]
///
/// Each operation renders its template, sends it, and returns the model text
/// unmodified. Nothing is retried, validated, or cached.
pub struct TutorAgent {
    llm_client: Arc<dyn LlmClient>,
    templates: Handlebars<'static>,
}

impl TutorAgent {
    /// Bind the fixed templates to a client
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Result<Self> {
        let mut templates = Handlebars::new();
        templates.set_strict_mode(true);
        templates.register_escape_fn(handlebars::no_escape);

        for operation in [Operation::Explain, Operation::CreateQcm] {
            templates.register_template_string(operation.as_str(), operation.user_template())?;
        }

        Ok(Self {
            llm_client,
            templates,
        })
    }

    /// Build an agent talking to the Ollama server described by `config`
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let client = OllamaClient::new(config)?;
        Self::new(Arc::new(client))
    }

    /// Explain a concept
    pub async fn explain(&self, topic: &str) -> Result<String> {
        self.run(Operation::Explain, topic).await
    }

    /// Generate one four-option multiple-choice question
    pub async fn create_qcm(&self, topic: &str) -> Result<String> {
        self.run(Operation::CreateQcm, topic).await
    }

    /// Run a single operation for `topic`
    pub async fn run(&self, operation: Operation, topic: &str) -> Result<String> {
        let user_text = self.render(operation, topic)?;
        debug!(
            "Running {} with {} model {}",
            operation,
            self.llm_client.provider_name(),
            self.llm_client.model_name()
        );

        self.llm_client
            .complete(operation.system_prompt(), &user_text)
            .await
    }

    /// Render the user message for an operation
    pub fn render(&self, operation: Operation, topic: &str) -> Result<String> {
        Ok(self
            .templates
            .render(operation.as_str(), &json!({ "topic": topic }))?)
    }
}
