use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Embedding provider error: {0}")]
    Provider(String),

    #[error("Dimension mismatch: corpus has {expected} dimensions, query has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}
