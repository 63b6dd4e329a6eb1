//! LLM client trait and response structures

use crate::error::Result;
use async_trait::async_trait;

use super::message::LlmMessage;

/// Trait for LLM clients
///
/// Every call is a single request/response exchange: the future resolves once
/// the service answered or the client gave up.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a chat completion request
    async fn chat_completion(&self, messages: Vec<LlmMessage>) -> Result<LlmResponse>;

    /// Get the model name
    fn model_name(&self) -> &str;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Complete a system instruction plus one user message into text
    async fn complete(&self, system_instruction: &str, user_text: &str) -> Result<String> {
        let messages = vec![
            LlmMessage::system(system_instruction),
            LlmMessage::user(user_text),
        ];
        let response = self.chat_completion(messages).await?;
        Ok(response.message.content)
    }
}

/// Response from an LLM
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The generated message
    pub message: LlmMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;
    use std::sync::Mutex;

    struct RecordingClient {
        seen: Mutex<Vec<LlmMessage>>,
    }

    #[async_trait]
    impl LlmClient for RecordingClient {
        async fn chat_completion(&self, messages: Vec<LlmMessage>) -> Result<LlmResponse> {
            self.seen.lock().unwrap().extend(messages);
            Ok(LlmResponse {
                message: LlmMessage::assistant("done"),
            })
        }

        fn model_name(&self) -> &str {
            "mock-model"
        }

        fn provider_name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_complete_sends_system_then_user() {
        let client = RecordingClient {
            seen: Mutex::new(Vec::new()),
        };

        let text = client.complete("be brief", "what is a trait?").await.unwrap();
        assert_eq!(text, "done");

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, MessageRole::System);
        assert_eq!(seen[0].content, "be brief");
        assert_eq!(seen[1].role, MessageRole::User);
        assert_eq!(seen[1].content, "what is a trait?");
    }
}
