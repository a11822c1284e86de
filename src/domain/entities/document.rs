use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored piece of free text, owned by the vector store once inserted.
/// Never mutated and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Ids are derived from the store's document count at insertion time:
    /// `doc_0`, `doc_1`, ... Unique only under serialized insertion.
    pub fn new(count: usize, content: String) -> Self {
        Self {
            id: format!("doc_{count}"),
            content,
            created_at: Utc::now(),
        }
    }
}
