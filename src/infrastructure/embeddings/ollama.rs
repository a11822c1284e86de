use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Embeddings from a local Ollama server (`POST /api/embed`).
pub struct OllamaEmbeddingProvider {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct OllamaEmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEmbeddingProvider {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or_else(|| "http://localhost:11434".to_string()),
            model: model.unwrap_or_else(|| "nomic-embed-text".to_string()),
        }
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "nomic-embed-text" => 768,
            "all-minilm" => 384,
            "mxbai-embed-large" => 1024,
            "snowflake-arctic-embed" => 1024,
            _ => 768,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        let url = format!("{}/api/embed", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&OllamaEmbedRequest {
                model: self.model.clone(),
                input: texts.to_vec(),
            })
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("Ollama API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!("Ollama API {status}: {body}")));
        }

        let result: OllamaEmbedResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        Ok(result.embeddings)
    }

    fn dimension(&self) -> usize {
        Self::model_dimension(&self.model)
    }
}
