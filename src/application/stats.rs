use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    pub total_documents: usize,
}

pub struct StatsUseCase {
    vector_store: Arc<dyn VectorStore>,
}

impl StatsUseCase {
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    pub fn execute(&self) -> Result<StoreStats, DomainError> {
        Ok(StoreStats {
            total_documents: self.vector_store.count()?,
        })
    }
}
