use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;

/// Store of (id, embedding, content) triples with nearest-neighbor lookup.
/// The store owns the documents once inserted; there is no update or delete.
pub trait VectorStore: Send + Sync {
    fn insert(&self, document: &Document, vector: &[f32]) -> Result<(), DomainError>;

    /// All documents in the store's native return order (insertion order for
    /// the SQLite implementation).
    fn get_all(&self) -> Result<Vec<Document>, DomainError>;

    /// The `top_k` nearest documents by cosine similarity, best first.
    fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<(Document, f64)>, DomainError>;

    fn count(&self) -> Result<usize, DomainError>;

    /// Dimension of the stored vectors, if any document exists.
    fn stored_dimension(&self) -> Result<Option<usize>, DomainError>;
}
