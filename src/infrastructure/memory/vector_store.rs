use crate::domain::entities::corpus::Corpus;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use crate::domain::values::search_output::ScoredText;
use std::sync::{Arc, PoisonError, RwLock};

/// Brute-force store over a single corpus snapshot.
///
/// The lock only guards the `Arc` swap; ranking runs on a cloned snapshot
/// outside it, so a rebuild never waits on a long search.
pub struct InMemoryVectorStore {
    corpus: RwLock<Arc<Corpus>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            corpus: RwLock::new(Arc::new(Corpus::empty())),
        }
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorStore for InMemoryVectorStore {
    fn replace(&self, corpus: Corpus) {
        let next = Arc::new(corpus);
        // A poisoned lock still holds a whole Arc, never a torn corpus.
        let mut guard = self.corpus.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }

    fn snapshot(&self) -> Arc<Corpus> {
        self.corpus
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn search_similar(&self, vector: &[f32], limit: usize) -> Result<Vec<ScoredText>, DomainError> {
        self.snapshot().rank(vector, limit)
    }
}
