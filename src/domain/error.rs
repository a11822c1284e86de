use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("No context found: the store has no documents. Add a document first.")]
    NoContext,

    #[error("Chat model error: {0}")]
    ChatModel(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Database(s)
    }
}
