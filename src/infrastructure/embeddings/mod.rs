pub mod hash;
pub mod openai;
pub mod voyage;

use crate::domain::error::DomainError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the adapter's HTTP client, building it on first use.
pub(crate) async fn lazy_client(cell: &OnceCell<Client>, timeout: Duration) -> Result<&Client, DomainError> {
    cell.get_or_try_init(|| async move {
        tracing::debug!(timeout_secs = timeout.as_secs(), "Building embedding HTTP client");
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Provider(format!("HTTP client error: {e}")))
    })
    .await
}

/// One item of an OpenAI-compatible `/v1/embeddings` response.
#[derive(Deserialize)]
pub(crate) struct IndexedEmbedding {
    #[serde(default)]
    pub index: Option<usize>,
    pub embedding: Vec<f32>,
}

/// Puts response items back in input order.
///
/// Items may arrive in any order; `index` ties each one to its input. When
/// no item carries an index, arrival order is taken as input order. Any
/// other gap, duplicate or out-of-range index fails the whole response.
pub(crate) fn into_ordered_vectors(data: Vec<IndexedEmbedding>, provider: &str) -> Result<Vec<Vec<f32>>, DomainError> {
    if data.iter().all(|d| d.index.is_none()) {
        return Ok(data.into_iter().map(|d| d.embedding).collect());
    }
    let len = data.len();
    let mut slots: Vec<Option<Vec<f32>>> = vec![None; len];
    for item in data {
        let index = item
            .index
            .ok_or_else(|| DomainError::Provider(format!("{provider} response item without an index")))?;
        let slot = slots.get_mut(index).ok_or_else(|| {
            DomainError::Provider(format!("{provider} response index {index} out of range for {len} items"))
        })?;
        if slot.is_some() {
            return Err(DomainError::Provider(format!("{provider} response repeats index {index}")));
        }
        *slot = Some(item.embedding);
    }
    // Every slot is filled: len items went into len distinct slots.
    Ok(slots.into_iter().flatten().collect())
}
