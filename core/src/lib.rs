//! # tutor Core
//!
//! Core library for tutor - a console revision assistant backed by a locally
//! hosted language model.
//!
//! This library provides the validated connection settings, the model client
//! abstraction with its Ollama implementation, and the agent that turns a
//! topic into an explanation or a multiple-choice question.

// Core modules
pub mod agent;
pub mod config;
pub mod error;
pub mod llm;

// Re-export commonly used types
pub use agent::{Operation, TutorAgent};
pub use config::{ModelConfig, ModelConfigBuilder};
pub use error::{ConfigError, Error, LlmError, Result};
pub use llm::{LlmClient, OllamaClient};

/// Current version of the tutor-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with a specific debug mode
///
/// Logs go to stderr so they never mix with answers printed on stdout.
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
