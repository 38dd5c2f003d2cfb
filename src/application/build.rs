use crate::application::embedding_client::EmbeddingClient;
use crate::domain::entities::corpus::Corpus;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::InputType;
use crate::domain::ports::vector_store::VectorStore;
use std::sync::Arc;

pub struct BuildUseCase {
    client: EmbeddingClient,
    vector_store: Arc<dyn VectorStore>,
}

impl BuildUseCase {
    pub fn new(client: EmbeddingClient, vector_store: Arc<dyn VectorStore>) -> Self {
        Self { client, vector_store }
    }

    /// Replaces the corpus with `texts` and returns the new record count.
    ///
    /// An empty `texts` leaves the current corpus in place and returns 0.
    /// The store is only written after embedding succeeds, so a failed or
    /// dropped build never changes what searches see.
    pub async fn execute(&self, texts: Vec<String>) -> Result<usize, DomainError> {
        if texts.is_empty() {
            tracing::debug!("Build called with no texts; keeping current corpus");
            return Ok(0);
        }

        tracing::info!(
            chunks = texts.len(),
            provider = self.client.provider_name(),
            "Embedding corpus"
        );
        let embeddings = self.client.embed_batch(&texts, InputType::Document).await?;
        let corpus = Corpus::from_pairs(texts, embeddings)?;
        let count = corpus.len();
        let dimension = corpus.dimension().unwrap_or(0);
        self.vector_store.replace(corpus);
        tracing::info!(records = count, dimension, "Corpus built");

        Ok(count)
    }
}
