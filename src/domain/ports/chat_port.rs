use crate::domain::error::DomainError;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Returns the model's textual reply. Any downstream failure (network,
    /// model unavailable, malformed response) comes back as
    /// `DomainError::ChatModel`, never a panic.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;
}
