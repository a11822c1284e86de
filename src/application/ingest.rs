use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct IngestUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
}

impl IngestUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self {
            embedder,
            vector_store,
        }
    }

    /// Embed `content`, derive the next count-based id, and insert. The raw
    /// text is stored untrimmed; trimming applies only to the emptiness check.
    pub async fn execute(&self, content: &str) -> Result<Document, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::EmptyInput(
                "document content cannot be empty".to_string(),
            ));
        }

        let vectors = self
            .embedder
            .embed(&[content.to_string()], InputType::Document)
            .await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Embedding("provider returned no vector".to_string()))?;

        // Count-then-derive id. Safe only under serialized insertion; a
        // collision surfaces as a primary-key conflict from the store.
        let count = self.vector_store.count()?;
        let document = Document::new(count, content.to_string());

        self.vector_store.insert(&document, &vector)?;

        Ok(document)
    }
}
