use crate::application::embedding_client::EmbeddingClient;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::InputType;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::search_output::{ScoredText, SearchOutput};
use std::sync::Arc;

pub struct SearchUseCase {
    client: EmbeddingClient,
    vector_store: Arc<dyn VectorStore>,
}

impl SearchUseCase {
    pub fn new(client: EmbeddingClient, vector_store: Arc<dyn VectorStore>) -> Self {
        Self { client, vector_store }
    }

    pub fn by_vector_scored(&self, query: &[f32], k: usize) -> Result<Vec<ScoredText>, DomainError> {
        self.vector_store.search_similar(query, k)
    }

    pub fn by_vector(&self, query: &[f32], k: usize) -> Result<Vec<String>, DomainError> {
        Ok(self
            .by_vector_scored(query, k)?
            .into_iter()
            .map(|r| r.text)
            .collect())
    }

    pub async fn by_text_scored(&self, query: &str, k: usize) -> Result<Vec<ScoredText>, DomainError> {
        if k == 0 {
            return Err(DomainError::InvalidInput("k must be at least 1".into()));
        }
        tracing::debug!(query_len = query.len(), k, "Embedding query");
        let vector = self.client.embed(query, InputType::Query).await?;
        self.by_vector_scored(&vector, k)
    }

    pub async fn by_text(&self, query: &str, k: usize, join: bool) -> Result<SearchOutput, DomainError> {
        let texts = self
            .by_text_scored(query, k)
            .await?
            .into_iter()
            .map(|r| r.text)
            .collect();
        Ok(SearchOutput::from_ranked(texts, join))
    }
}
