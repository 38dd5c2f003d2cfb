use crate::domain::entities::corpus::Corpus;
use crate::domain::error::DomainError;
use crate::domain::values::search_output::ScoredText;
use std::sync::Arc;

pub trait VectorStore: Send + Sync {
    /// Swaps in a whole new corpus. Readers see either the old or the new one.
    fn replace(&self, corpus: Corpus);
    fn snapshot(&self) -> Arc<Corpus>;
    fn search_similar(&self, vector: &[f32], limit: usize) -> Result<Vec<ScoredText>, DomainError>;
}
