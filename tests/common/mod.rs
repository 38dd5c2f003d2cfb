//! Shared test helpers.
#![allow(dead_code)]

use ragstore::domain::error::DomainError;
use ragstore::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use ragstore::RagStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const DIM: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Fail,
    /// Drops the last vector of every batch
    ShortBatch,
    /// Never completes
    Hang,
    /// Two-component vectors while three are declared
    WrongDimension,
    /// Alternates two- and three-component vectors
    MixedDimensions,
    /// NaN in the first vector of every batch
    NonFinite,
    /// Zero-length vectors
    Empty,
}

/// Provider with fixed vectors for known words and a hash-derived vector
/// for anything else.
pub struct StubProvider {
    vectors: HashMap<String, Vec<f32>>,
    mode: Mutex<Mode>,
    declared_dimension: AtomicUsize,
    calls: AtomicUsize,
    input_types: Mutex<Vec<InputType>>,
}

impl StubProvider {
    pub fn new() -> Self {
        let mut vectors = HashMap::new();
        vectors.insert("apple".to_string(), vec![1.0, 0.0, 0.0]);
        vectors.insert("banana".to_string(), vec![0.8, 0.6, 0.0]);
        vectors.insert("car".to_string(), vec![0.0, 0.0, 1.0]);
        Self {
            vectors,
            mode: Mutex::new(Mode::Normal),
            declared_dimension: AtomicUsize::new(DIM),
            calls: AtomicUsize::new(0),
            input_types: Mutex::new(vec![]),
        }
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    /// 0 means the provider does not know its dimension up front.
    pub fn set_declared_dimension(&self, dimension: usize) {
        self.declared_dimension.store(dimension, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn input_types(&self) -> Vec<InputType> {
        self.input_types.lock().unwrap().clone()
    }

    pub fn vector_for(&self, text: &str) -> Vec<f32> {
        if let Some(v) = self.vectors.get(text) {
            return v.clone();
        }
        let seed = text
            .bytes()
            .fold(17_u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
        (0..DIM)
            .map(|i| ((seed >> (i * 8)) & 0xff) as f32 / 255.0 + 0.01)
            .collect()
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.input_types.lock().unwrap().push(input_type);
        let mode = *self.mode.lock().unwrap();
        match mode {
            Mode::Normal => Ok(texts.iter().map(|t| self.vector_for(t)).collect()),
            Mode::Fail => Err(DomainError::Provider("stub provider unavailable".into())),
            Mode::ShortBatch => {
                let mut out: Vec<Vec<f32>> = texts.iter().map(|t| self.vector_for(t)).collect();
                out.pop();
                Ok(out)
            }
            Mode::Hang => std::future::pending().await,
            Mode::WrongDimension => Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect()),
            Mode::MixedDimensions => Ok(texts
                .iter()
                .enumerate()
                .map(|(i, _)| if i % 2 == 0 { vec![1.0, 0.0] } else { vec![1.0, 0.0, 0.0] })
                .collect()),
            Mode::NonFinite => Ok(texts
                .iter()
                .enumerate()
                .map(|(i, t)| if i == 0 { vec![f32::NAN, 0.0, 0.0] } else { self.vector_for(t) })
                .collect()),
            Mode::Empty => Ok(texts.iter().map(|_| vec![]).collect()),
        }
    }

    fn dimension(&self) -> usize {
        self.declared_dimension.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub fn setup() -> (RagStore, Arc<StubProvider>) {
    let provider = Arc::new(StubProvider::new());
    let store = RagStore::with_provider(provider.clone());
    (store, provider)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
