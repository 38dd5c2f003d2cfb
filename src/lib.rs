pub mod application;
pub mod blocking;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use crate::application::build::BuildUseCase;
use crate::application::embedding_client::EmbeddingClient;
use crate::application::search::SearchUseCase;
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::search_output::{ScoredText, SearchOutput};
use crate::infrastructure::memory::vector_store::InMemoryVectorStore;
use std::sync::Arc;

/// Handle to one in-memory corpus and the embedding client that feeds it.
///
/// Cloning is cheap and every clone shares the same store, so one handle
/// can be given to each request handler.
#[derive(Clone)]
pub struct RagStore {
    client: EmbeddingClient,
    vector_store: Arc<dyn VectorStore>,
    build_uc: Arc<BuildUseCase>,
    search_uc: Arc<SearchUseCase>,
}

impl RagStore {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        Ok(Self::with_provider(config.embedding_provider()?))
    }

    pub fn with_provider(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_store(embedder, Arc::new(InMemoryVectorStore::new()))
    }

    pub fn with_store(embedder: Arc<dyn EmbeddingProvider>, vector_store: Arc<dyn VectorStore>) -> Self {
        let client = EmbeddingClient::new(embedder);
        Self {
            build_uc: Arc::new(BuildUseCase::new(client.clone(), vector_store.clone())),
            search_uc: Arc::new(SearchUseCase::new(client.clone(), vector_store.clone())),
            client,
            vector_store,
        }
    }

    // Delegating methods
    pub async fn build(&self, texts: Vec<String>) -> Result<usize, DomainError> {
        self.build_uc.execute(texts).await
    }

    pub fn search_by_vector(&self, query: &[f32], k: usize) -> Result<Vec<String>, DomainError> {
        self.search_uc.by_vector(query, k)
    }

    pub fn search_by_vector_scored(&self, query: &[f32], k: usize) -> Result<Vec<ScoredText>, DomainError> {
        self.search_uc.by_vector_scored(query, k)
    }

    pub async fn search_by_text(&self, query: &str, k: usize, join: bool) -> Result<SearchOutput, DomainError> {
        self.search_uc.by_text(query, k, join).await
    }

    pub async fn search_by_text_scored(&self, query: &str, k: usize) -> Result<Vec<ScoredText>, DomainError> {
        self.search_uc.by_text_scored(query, k).await
    }

    /// `build` embeds as [`InputType::Document`] and text searches as
    /// [`InputType::Query`]; pass the matching kind to reproduce either.
    pub async fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, DomainError> {
        self.client.embed(text, input_type).await
    }

    pub async fn embed_batch(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        self.client.embed_batch(texts, input_type).await
    }

    pub fn embedding_client(&self) -> &EmbeddingClient {
        &self.client
    }

    pub fn len(&self) -> usize {
        self.vector_store.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vector_store.snapshot().is_empty()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.vector_store.snapshot().dimension()
    }

    /// Texts of the current corpus in insertion order.
    pub fn texts(&self) -> Vec<String> {
        self.vector_store
            .snapshot()
            .records()
            .iter()
            .map(|r| r.text().to_string())
            .collect()
    }
}
