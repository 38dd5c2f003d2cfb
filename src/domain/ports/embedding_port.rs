use crate::domain::error::DomainError;

/// Whether text is being embedded for storage or for lookup. Providers
/// that distinguish the two (asymmetric models) tune the vector for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Document,
    Query,
}

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// One vector per input text, in input order.
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Fixed output dimension, or 0 when the provider cannot tell up front.
    fn dimension(&self) -> usize;

    fn name(&self) -> &str;
}
