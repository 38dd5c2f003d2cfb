//! Validating front for an [`EmbeddingProvider`].
//!
//! Providers are trusted for transport only. Anything that would break the
//! corpus invariants (wrong vector count, mixed or unexpected dimensions,
//! NaN/Inf components) is turned into a provider error here, so a bad
//! response fails the whole call and nothing downstream sees it.

use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::values::similarity::is_finite_vector;
use std::sync::Arc;

#[derive(Clone)]
pub struct EmbeddingClient {
    provider: Arc<dyn EmbeddingProvider>,
}

impl EmbeddingClient {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub async fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, DomainError> {
        let mut vectors = self.embed_batch(&[text.to_string()], input_type).await?;
        vectors
            .pop()
            .ok_or_else(|| DomainError::Provider("Provider returned no embedding".into()))
    }

    /// Embeds `texts` in one provider call. An empty slice returns at once.
    pub async fn embed_batch(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        let vectors = self.provider.embed(texts, input_type).await?;
        self.validate(texts.len(), &vectors)?;
        Ok(vectors)
    }

    fn validate(&self, expected_count: usize, vectors: &[Vec<f32>]) -> Result<(), DomainError> {
        if vectors.len() != expected_count {
            return Err(DomainError::Provider(format!(
                "{} returned {} embeddings for {expected_count} inputs",
                self.provider.name(),
                vectors.len()
            )));
        }
        let declared = self.provider.dimension();
        let dimension = if declared > 0 { declared } else { vectors[0].len() };
        if dimension == 0 {
            return Err(DomainError::Provider(format!(
                "{} returned empty embeddings",
                self.provider.name()
            )));
        }
        for (i, v) in vectors.iter().enumerate() {
            if v.len() != dimension {
                return Err(DomainError::Provider(format!(
                    "{} returned {} dimensions for input {i}, expected {dimension}",
                    self.provider.name(),
                    v.len()
                )));
            }
            if !is_finite_vector(v) {
                return Err(DomainError::Provider(format!(
                    "{} returned a non-finite value for input {i}",
                    self.provider.name()
                )));
            }
        }
        Ok(())
    }
}
