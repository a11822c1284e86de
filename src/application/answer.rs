use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::chat_port::{ChatMessage, ChatProvider};
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::VectorStore;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    /// The single document used as context for the reply.
    pub context: Document,
}

pub struct AnswerUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    chat: Arc<dyn ChatProvider>,
}

impl AnswerUseCase {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
        chat: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            embedder,
            vector_store,
            chat,
        }
    }

    /// Embed the question, retrieve the single nearest document, and ask the
    /// chat model with that document as context. Retrieval width is fixed at
    /// one match; there is no ranking, thresholding, or multi-document
    /// context assembly.
    pub async fn execute(&self, question: &str) -> Result<Answer, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::EmptyInput(
                "question cannot be empty".to_string(),
            ));
        }

        let vectors = self
            .embedder
            .embed(&[question.to_string()], InputType::Query)
            .await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Embedding("provider returned no vector".to_string()))?;

        let results = self.vector_store.query(&vector, 1)?;
        let (context_doc, _score) = results.into_iter().next().ok_or(DomainError::NoContext)?;

        let prompt = format!(
            "Context: {}\nQuestion: {}\nAnswer:",
            context_doc.content, question
        );
        let text = self.chat.chat(&[ChatMessage::user(prompt)]).await?;

        Ok(Answer {
            text,
            context: context_doc,
        })
    }
}
