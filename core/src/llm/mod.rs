//! LLM client abstractions and implementations

pub mod client;
pub mod message;
pub mod providers;

pub use client::{LlmClient, LlmResponse};
pub use message::{LlmMessage, MessageRole};
pub use providers::*;
