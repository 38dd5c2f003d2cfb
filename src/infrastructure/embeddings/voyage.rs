use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::infrastructure::embeddings::{into_ordered_vectors, lazy_client, IndexedEmbedding, DEFAULT_TIMEOUT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::OnceCell;

pub const DEFAULT_MODEL: &str = "voyage-3-lite";
pub const DEFAULT_BASE_URL: &str = "https://api.voyageai.com";

pub struct VoyageProvider {
    client: OnceCell<Client>,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct VoyageRequest<'a> {
    input: &'a [String],
    model: &'a str,
    input_type: &'static str,
}

#[derive(Deserialize)]
struct VoyageResponse {
    data: Vec<IndexedEmbedding>,
}

impl VoyageProvider {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: OnceCell::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn model_dimension(model: &str) -> usize {
        match model {
            "voyage-3-lite" => 512,
            "voyage-3" | "voyage-3.5" | "voyage-3.5-lite" | "voyage-3-large" | "voyage-code-3" => 1024,
            "voyage-large-2" => 1536,
            _ => 0,
        }
    }
}

fn input_type_param(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Document => "document",
        InputType::Query => "query",
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for VoyageProvider {
    async fn embed(&self, texts: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>, DomainError> {
        let client = lazy_client(&self.client, self.timeout).await?;
        let url = format!("{}/v1/embeddings", self.base_url.trim_end_matches('/'));

        let resp = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&VoyageRequest {
                input: texts,
                model: &self.model,
                input_type: input_type_param(input_type),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Voyage embeddings request failed");
                DomainError::Provider(format!("Voyage API error: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "Voyage embeddings returned an error status");
            return Err(DomainError::Provider(format!("Voyage API {status}: {body}")));
        }

        let result: VoyageResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Provider(format!("Voyage parse error: {e}")))?;
        into_ordered_vectors(result.data, "Voyage")
    }

    fn dimension(&self) -> usize {
        Self::model_dimension(&self.model)
    }

    fn name(&self) -> &str {
        "voyage"
    }
}
