pub mod build;
pub mod embedding_client;
pub mod search;
