use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct ListUseCase {
    vector_store: Arc<dyn VectorStore>,
}

impl ListUseCase {
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    /// All stored documents in the store's native order. An empty store
    /// yields an empty vec, not an error.
    pub fn execute(&self) -> Result<Vec<Document>, DomainError> {
        self.vector_store.get_all()
    }
}
