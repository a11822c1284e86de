use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;

pub struct SqliteVectorStore {
    conn: Mutex<Connection>,
}

impl SqliteVectorStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }

    fn serialize_vector(v: &[f32]) -> Vec<u8> {
        v.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_vector(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn row_to_document(row: &rusqlite::Row) -> Result<Document, rusqlite::Error> {
        let created_str: String = row.get(2)?;
        Ok(Document {
            id: row.get(0)?,
            content: row.get(1)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl VectorStore for SqliteVectorStore {
    fn insert(&self, document: &Document, vector: &[f32]) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let blob = Self::serialize_vector(vector);
        // Plain INSERT: a duplicate id (the count-derived scheme under
        // concurrent writers) fails loudly instead of silently overwriting.
        conn.execute(
            "INSERT INTO documents (id, content, embedding, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                document.id,
                document.content,
                blob,
                document.created_at.to_rfc3339()
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to insert document: {e}")))?;
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Document>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, content, created_at FROM documents ORDER BY rowid")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let docs = stmt
            .query_map([], Self::row_to_document)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(docs)
    }

    fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<(Document, f64)>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        // Brute-force scan; store sizes here are interactive-demo scale.
        let mut stmt = conn
            .prepare("SELECT id, content, created_at, embedding FROM documents")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut results: Vec<(Document, f64)> = stmt
            .query_map([], |row| {
                let doc = Self::row_to_document(row)?;
                let blob: Vec<u8> = row.get(3)?;
                Ok((doc, blob))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .map(|(doc, blob)| {
                let stored = Self::deserialize_vector(&blob);
                let sim = Self::cosine_similarity(vector, &stored);
                (doc, sim)
            })
            .collect();

        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(top_k);
        Ok(results)
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM documents", [], |r| r.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(count as usize)
    }

    fn stored_dimension(&self) -> Result<Option<usize>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let blob: Option<Vec<u8>> = conn
            .query_row(
                "SELECT embedding FROM documents ORDER BY rowid LIMIT 1",
                [],
                |r| r.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(DomainError::Database(other.to_string())),
            })?;
        Ok(blob.map(|b| b.len() / 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [1.0_f32, 2.0, 3.0];
        let sim = SqliteVectorStore::cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = [1.0_f32, 0.0];
        let b = [0.0_f32, 1.0];
        assert_eq!(SqliteVectorStore::cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_mismatched_lengths() {
        let a = [1.0_f32, 0.0];
        let b = [1.0_f32];
        assert_eq!(SqliteVectorStore::cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_vector_blob_round_trip() {
        let v = vec![0.5_f32, -1.25, 3.75, 0.0];
        let blob = SqliteVectorStore::serialize_vector(&v);
        assert_eq!(blob.len(), 16);
        assert_eq!(SqliteVectorStore::deserialize_vector(&blob), v);
    }
}
