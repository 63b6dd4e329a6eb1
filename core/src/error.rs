//! Error types and handling for tutor core

use std::time::Duration;
use thiserror::Error;

/// Result type alias for tutor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tutor core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// LLM client errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Prompt template errors
    #[error("Template error: {0}")]
    Template(String),
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ConfigError::MissingField { field } | ConfigError::InvalidValue { field, .. } => field,
        }
    }
}

/// LLM client errors
#[derive(Error, Debug)]
pub enum LlmError {
    /// The request never produced a response (connection refused, DNS, reset...)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// No response arrived within the configured timeout
    #[error("Request timed out after {}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// The remote service answered, but not with a usable completion
    #[error("Service error: {status} - {message}")]
    Service { status: u16, message: String },
}

impl LlmError {
    /// Whether this failure happened on the way to or from the service
    pub fn is_transport(&self) -> bool {
        matches!(self, LlmError::Transport { .. } | LlmError::Timeout { .. })
    }

    /// Whether the service itself reported the failure
    pub fn is_service(&self) -> bool {
        matches!(self, LlmError::Service { .. })
    }
}

impl Error {
    /// The underlying LLM failure, if this error came from the model client
    pub fn as_llm(&self) -> Option<&LlmError> {
        match self {
            Error::Llm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(err: handlebars::RenderError) -> Self {
        Error::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(err: handlebars::TemplateError) -> Self {
        Error::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        let refused = LlmError::Transport {
            message: "connection refused".to_string(),
        };
        let timeout = LlmError::Timeout {
            timeout: Duration::from_secs(60),
        };
        let service = LlmError::Service {
            status: 404,
            message: "model not found".to_string(),
        };

        assert!(refused.is_transport());
        assert!(timeout.is_transport());
        assert!(!service.is_transport());
        assert!(service.is_service());
    }

    #[test]
    fn test_config_error_names_field() {
        let err = ConfigError::InvalidValue {
            field: "timeout".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.field(), "timeout");
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_llm_error_wraps_into_error() {
        let err: Error = LlmError::Service {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert!(err.as_llm().is_some_and(LlmError::is_service));
        assert!(err.to_string().contains("500"));
    }
}
