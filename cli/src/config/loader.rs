//! Simple CLI configuration loader for tutor
//!
//! Resolution order, highest priority first:
//! 1. Flag overrides (`--endpoint`, `--model`, `--timeout`)
//! 2. The file passed with `--config` (never searched for implicitly)
//! 3. Built-in defaults for a local Ollama server

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tutor_core::ModelConfig;

/// Endpoint of a default local Ollama install
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/";

/// Small model that runs on most laptops
pub const DEFAULT_MODEL: &str = "gemma3:1b";

/// Local models can be slow on first load
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Raw configuration file format
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Base URL of the model service
    pub endpoint: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Config file path
    config_override: Option<PathBuf>,
    /// Flag overrides
    endpoint_override: Option<String>,
    model_override: Option<String>,
    timeout_override: Option<u64>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set endpoint override
    pub fn with_endpoint_override(mut self, endpoint: String) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Set timeout override, in seconds
    pub fn with_timeout_override(mut self, timeout_secs: u64) -> Self {
        self.timeout_override = Some(timeout_secs);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ModelConfig> {
        // Step 1: Load the config file, if any
        let mut config = match &self.config_override {
            Some(path) => self.load_file(path).await?,
            None => RawConfig::default(),
        };

        // Step 2: Apply flag overrides
        if let Some(endpoint) = &self.endpoint_override {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(model) = &self.model_override {
            config.model = Some(model.clone());
        }
        if let Some(timeout_secs) = self.timeout_override {
            config.timeout_secs = Some(timeout_secs);
        }

        // Step 3: Resolve to final model config
        self.resolve_config(config)
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Fill in defaults and validate
    fn resolve_config(&self, config: RawConfig) -> Result<ModelConfig> {
        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        ModelConfig::builder()
            .endpoint(config.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()))
            .model(config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .timeout(timeout)
            .build()
            .context("Configuration validation failed")
    }
}
