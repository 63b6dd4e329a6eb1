//! Connection settings for the model service
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use std::time::Duration;

/// Timeout applied when none is given
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Validated, read-only settings for reaching a model service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl ModelConfig {
    /// Validate and create a configuration
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        let model = model.into();

        require_non_blank("endpoint", &endpoint)?;
        require_non_blank("model", &model)?;

        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "timeout".to_string(),
                reason: "must be strictly positive".to_string(),
            });
        }

        Ok(Self {
            endpoint,
            model,
            timeout,
        })
    }

    /// Start building a configuration
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// Base URL of the model service
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Maximum time to wait for one response
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Builder for [`ModelConfig`]
#[derive(Debug, Clone, Default)]
pub struct ModelConfigBuilder {
    endpoint: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl ModelConfigBuilder {
    /// Set the base URL of the model service
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the request timeout (defaults to [`DEFAULT_TIMEOUT`])
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the collected values
    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        let endpoint = self.endpoint.ok_or_else(|| ConfigError::MissingField {
            field: "endpoint".to_string(),
        })?;
        let model = self.model.ok_or_else(|| ConfigError::MissingField {
            field: "model".to_string(),
        })?;

        ModelConfig::new(endpoint, model, self.timeout.unwrap_or(DEFAULT_TIMEOUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_keeps_fields() {
        let cases = [
            ("http://localhost:11434/", "gemma3:1b", Duration::from_secs(120)),
            ("https://models.internal", "llama3.2", Duration::from_millis(1)),
            ("http://127.0.0.1:8080", " qwen ", Duration::from_secs(3600)),
        ];

        for (endpoint, model, timeout) in cases {
            let config = ModelConfig::builder()
                .endpoint(endpoint)
                .model(model)
                .timeout(timeout)
                .build()
                .unwrap();

            assert_eq!(config.endpoint(), endpoint);
            assert_eq!(config.model(), model);
            assert_eq!(config.timeout(), timeout);
        }
    }

    #[test]
    fn test_default_timeout() {
        let config = ModelConfig::builder()
            .endpoint("http://localhost:11434")
            .model("gemma3:1b")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_blank_values_rejected() {
        for blank in ["", " ", "\t\n"] {
            let err = ModelConfig::new(blank, "gemma3:1b", DEFAULT_TIMEOUT).unwrap_err();
            assert_eq!(err.field(), "endpoint");

            let err = ModelConfig::new("http://localhost:11434", blank, DEFAULT_TIMEOUT).unwrap_err();
            assert_eq!(err.field(), "model");
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ModelConfig::builder()
            .endpoint("http://localhost:11434")
            .model("gemma3:1b")
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();

        assert_eq!(err.field(), "timeout");
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = ModelConfig::builder().model("gemma3:1b").build().unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingField {
                field: "endpoint".to_string()
            }
        );

        let err = ModelConfig::builder()
            .endpoint("http://localhost:11434")
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "model");
    }
}
