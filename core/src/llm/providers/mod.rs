//! Concrete LLM clients

pub mod ollama;

pub use ollama::OllamaClient;
