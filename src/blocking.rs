//! Synchronous calling convention over [`RagStore`].
//!
//! The async facade stays the single implementation; these wrappers drive
//! it on a private current-thread runtime. They must not be called from
//! inside an async task, since blocking there would stall the executor
//! (tokio panics on a nested `block_on`).

use crate::application::embedding_client::EmbeddingClient;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::InputType;
use crate::domain::values::search_output::{ScoredText, SearchOutput};
use crate::RagStore;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

fn current_thread_runtime() -> Result<Arc<Runtime>, DomainError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map(Arc::new)
        .map_err(|e| DomainError::Io(format!("Failed to start blocking runtime: {e}")))
}

pub struct BlockingRagStore {
    inner: RagStore,
    runtime: Arc<Runtime>,
}

impl BlockingRagStore {
    pub fn new(inner: RagStore) -> Result<Self, DomainError> {
        Ok(Self {
            inner,
            runtime: current_thread_runtime()?,
        })
    }

    /// The shared async handle; clones of it see the same corpus.
    pub fn inner(&self) -> &RagStore {
        &self.inner
    }

    pub fn build(&self, texts: Vec<String>) -> Result<usize, DomainError> {
        self.runtime.block_on(self.inner.build(texts))
    }

    // Scoring never suspends, so the vector searches skip the runtime.
    pub fn search_by_vector(&self, query: &[f32], k: usize) -> Result<Vec<String>, DomainError> {
        self.inner.search_by_vector(query, k)
    }

    pub fn search_by_vector_scored(&self, query: &[f32], k: usize) -> Result<Vec<ScoredText>, DomainError> {
        self.inner.search_by_vector_scored(query, k)
    }

    pub fn search_by_text(&self, query: &str, k: usize, join: bool) -> Result<SearchOutput, DomainError> {
        self.runtime.block_on(self.inner.search_by_text(query, k, join))
    }

    pub fn search_by_text_scored(&self, query: &str, k: usize) -> Result<Vec<ScoredText>, DomainError> {
        self.runtime.block_on(self.inner.search_by_text_scored(query, k))
    }

    pub fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, DomainError> {
        self.runtime.block_on(self.inner.embed(text, input_type))
    }

    pub fn embed_batch(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        self.runtime.block_on(self.inner.embed_batch(texts, input_type))
    }

    pub fn embedding_client(&self) -> BlockingEmbeddingClient {
        BlockingEmbeddingClient {
            inner: self.inner.embedding_client().clone(),
            runtime: self.runtime.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.inner.dimension()
    }
}

pub struct BlockingEmbeddingClient {
    inner: EmbeddingClient,
    runtime: Arc<Runtime>,
}

impl BlockingEmbeddingClient {
    pub fn new(inner: EmbeddingClient) -> Result<Self, DomainError> {
        Ok(Self {
            inner,
            runtime: current_thread_runtime()?,
        })
    }

    pub fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, DomainError> {
        self.runtime.block_on(self.inner.embed(text, input_type))
    }

    pub fn embed_batch(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        self.runtime.block_on(self.inner.embed_batch(texts, input_type))
    }
}
