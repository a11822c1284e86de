use crate::domain::error::DomainError;
use crate::domain::ports::chat_port::{ChatMessage, ChatProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Chat completions from a local Ollama server (`POST /api/chat`,
/// non-streaming).
pub struct OllamaChatProvider {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaChatMessage,
}

#[derive(Deserialize)]
struct OllamaChatMessage {
    content: String,
}

impl OllamaChatProvider {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or_else(|| "http://localhost:11434".to_string()),
            model: model.unwrap_or_else(|| "llama2".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl ChatProvider for OllamaChatProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let url = format!("{}/api/chat", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&OllamaChatRequest {
                model: self.model.clone(),
                messages: messages.to_vec(),
                stream: false,
            })
            .send()
            .await
            .map_err(|e| DomainError::ChatModel(format!("Ollama API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ChatModel(format!("Ollama API {status}: {body}")));
        }

        let result: OllamaChatResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::ChatModel(format!("Parse error: {e}")))?;
        Ok(result.message.content)
    }
}
