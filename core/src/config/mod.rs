//! Minimal configuration module for tutor core
//!
//! Only exports validated data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{ModelConfig, ModelConfigBuilder, DEFAULT_TIMEOUT};
