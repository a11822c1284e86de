//! Shared test helpers and provider doubles.

use docrag::domain::error::DomainError;
use docrag::domain::ports::chat_port::{ChatMessage, ChatProvider};
use docrag::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use docrag::infrastructure::embeddings::noop::NoopProvider;
use docrag::DocRag;
use std::sync::{Arc, Mutex};

/// Chat double that records every call and returns a canned reply.
pub struct RecordingChat {
    pub reply: String,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl RecordingChat {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ChatProvider for RecordingChat {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

/// Chat double that always fails, like an unreachable Ollama server.
pub struct FailingChat;

#[async_trait::async_trait]
impl ChatProvider for FailingChat {
    async fn chat(&self, _messages: &[ChatMessage]) -> Result<String, DomainError> {
        Err(DomainError::ChatModel(
            "Ollama API error: connection refused".to_string(),
        ))
    }
}

/// Deterministic embedder: one dimension per vocabulary word, value = number
/// of occurrences in the lowercased text.
pub struct KeywordEmbedder {
    vocab: Vec<&'static str>,
}

impl KeywordEmbedder {
    pub fn new(vocab: Vec<&'static str>) -> Self {
        Self { vocab }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for KeywordEmbedder {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                self.vocab
                    .iter()
                    .map(|word| lower.matches(word).count() as f32)
                    .collect()
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        self.vocab.len()
    }
}

pub fn setup() -> (DocRag, Arc<RecordingChat>) {
    let chat = Arc::new(RecordingChat::new("canned reply"));
    let rag = DocRag::with_providers(":memory:", Arc::new(NoopProvider), chat.clone()).unwrap();
    (rag, chat)
}

pub fn setup_with(
    embedder: Arc<dyn EmbeddingProvider>,
    chat: Arc<dyn ChatProvider>,
) -> DocRag {
    DocRag::with_providers(":memory:", embedder, chat).unwrap()
}
