//! Ollama chat client implementation

use crate::config::ModelConfig;
use crate::error::{ConfigError, LlmError, Result};
use crate::llm::{LlmClient, LlmMessage, LlmResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the `/api/chat` endpoint of an Ollama server
pub struct OllamaClient {
    client: Client,
    chat_url: Url,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a new Ollama client from validated model configuration
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let chat_url = chat_url(config.endpoint())?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Transport {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            chat_url,
            model: config.model().to_string(),
            timeout: config.timeout(),
        })
    }

    fn map_request_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout {
                timeout: self.timeout,
            }
        } else {
            LlmError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Resolve `<endpoint>/api/chat`, keeping any path prefix on the endpoint
fn chat_url(endpoint: &str) -> std::result::Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        field: "endpoint".to_string(),
        reason,
    };

    let mut base = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme '{}', expected http or https",
            base.scheme()
        )));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("api/chat").map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn chat_completion(&self, messages: Vec<LlmMessage>) -> Result<LlmResponse> {
        let request = OllamaChatRequest {
            model: &self.model,
            messages: &messages,
            stream: false,
        };

        debug!(
            "Ollama request to {} with model {} ({} messages)",
            self.chat_url,
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(self.chat_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<OllamaErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err((LlmError::Service {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let ollama_response: OllamaChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Service {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })?;

        debug!(
            "Ollama response from {} (done: {}, prompt tokens: {:?}, completion tokens: {:?})",
            ollama_response.model,
            ollama_response.done,
            ollama_response.prompt_eval_count,
            ollama_response.eval_count
        );

        Ok(LlmResponse {
            message: ollama_response.message,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [LlmMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    model: String,
    message: LlmMessage,
    #[serde(default)]
    done: bool,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorResponse {
    error: String,
}
