pub mod embeddings;
pub mod ingest;
pub mod memory;
