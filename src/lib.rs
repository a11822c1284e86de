pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::answer::{Answer, AnswerUseCase};
use crate::application::ingest::IngestUseCase;
use crate::application::list::ListUseCase;
use crate::application::stats::{StatsUseCase, StoreStats};
use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::chat_port::ChatProvider;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_store::VectorStore;
use crate::infrastructure::chat::ollama::OllamaChatProvider;
use crate::infrastructure::embeddings::noop::NoopProvider;
use crate::infrastructure::embeddings::ollama::OllamaEmbeddingProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::vector_store::SqliteVectorStore;
use rusqlite::Connection;
use std::sync::Arc;

pub struct DocRag {
    ingest_uc: IngestUseCase,
    answer_uc: AnswerUseCase,
    list_uc: ListUseCase,
    stats_uc: StatsUseCase,
}

impl DocRag {
    /// Wire providers from the environment. `DOCRAG_EMBEDDING_PROVIDER`
    /// selects ollama (default), openai, or noop; the chat model is always
    /// Ollama, `DOCRAG_CHAT_MODEL` overriding the model name.
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let provider =
            std::env::var("DOCRAG_EMBEDDING_PROVIDER").unwrap_or_else(|_| "ollama".into());
        let api_key = std::env::var("DOCRAG_EMBEDDING_API_KEY").unwrap_or_default();
        let embed_model = std::env::var("DOCRAG_EMBEDDING_MODEL").ok();
        let ollama_url = std::env::var("DOCRAG_OLLAMA_URL").ok();
        let chat_model = std::env::var("DOCRAG_CHAT_MODEL").ok();

        let embedder: Arc<dyn EmbeddingProvider> = match provider.as_str() {
            "openai" => Arc::new(OpenAiProvider::new(api_key, embed_model)),
            "noop" => Arc::new(NoopProvider),
            _ => Arc::new(OllamaEmbeddingProvider::new(ollama_url.clone(), embed_model)),
        };
        let chat: Arc<dyn ChatProvider> = Arc::new(OllamaChatProvider::new(ollama_url, chat_model));

        Self::with_providers(db_path, embedder, chat)
    }

    pub fn with_providers(
        db_path: &str,
        embedder: Arc<dyn EmbeddingProvider>,
        chat: Arc<dyn ChatProvider>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;

        run_migrations(&conn)?;

        let vector_store: Arc<dyn VectorStore> = Arc::new(SqliteVectorStore::new(conn));

        // Catch an embedding-model switch before mixed-dimension vectors
        // make retrieval meaningless.
        let provider_dim = embedder.dimension();
        if provider_dim > 0 {
            if let Ok(Some(stored_dim)) = vector_store.stored_dimension() {
                if stored_dim != provider_dim {
                    eprintln!(
                        "WARNING: stored vectors have dimension {stored_dim} but the current embedding provider reports {provider_dim}. Queries against existing documents will not match; re-add them with the current provider."
                    );
                }
            }
        }

        Ok(Self {
            ingest_uc: IngestUseCase::new(embedder.clone(), vector_store.clone()),
            answer_uc: AnswerUseCase::new(embedder, vector_store.clone(), chat),
            list_uc: ListUseCase::new(vector_store.clone()),
            stats_uc: StatsUseCase::new(vector_store),
        })
    }

    // Delegating methods
    pub async fn ingest(&self, content: &str) -> Result<Document, DomainError> {
        self.ingest_uc.execute(content).await
    }

    pub async fn answer(&self, question: &str) -> Result<Answer, DomainError> {
        self.answer_uc.execute(question).await
    }

    pub fn list_documents(&self) -> Result<Vec<Document>, DomainError> {
        self.list_uc.execute()
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        self.stats_uc.execute()
    }
}
