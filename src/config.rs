//! Environment-driven configuration.

use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::values::provider_kind::ProviderKind;
use crate::infrastructure::embeddings::hash::{HashProvider, DEFAULT_DIMENSION};
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::embeddings::voyage::VoyageProvider;
use crate::infrastructure::embeddings::DEFAULT_TIMEOUT;
use crate::infrastructure::ingest::splitter::{CharacterTextSplitter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

pub mod env_vars {
    pub const PROVIDER: &str = "RAGSTORE_EMBEDDING_PROVIDER";
    pub const API_KEY: &str = "RAGSTORE_EMBEDDING_API_KEY";
    pub const MODEL: &str = "RAGSTORE_EMBEDDING_MODEL";
    pub const BASE_URL: &str = "RAGSTORE_EMBEDDING_BASE_URL";
    pub const TIMEOUT_SECS: &str = "RAGSTORE_EMBEDDING_TIMEOUT_SECS";
    pub const HASH_DIMENSION: &str = "RAGSTORE_HASH_DIMENSION";
    pub const CHUNK_SIZE: &str = "RAGSTORE_CHUNK_SIZE";
    pub const CHUNK_OVERLAP: &str = "RAGSTORE_CHUNK_OVERLAP";
    pub const LOG: &str = "RAGSTORE_LOG";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const VOYAGE_API_KEY: &str = "VOYAGE_API_KEY";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub hash_dimension: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            model: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            hash_dimension: DEFAULT_DIMENSION,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            log_level: Level::WARN,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let provider = match get(env_vars::PROVIDER) {
            Some(p) => ProviderKind::from_str(&p).map_err(DomainError::Config)?,
            None => defaults.provider,
        };
        let fallback_key = match provider {
            ProviderKind::OpenAi => get(env_vars::OPENAI_API_KEY),
            ProviderKind::Voyage => get(env_vars::VOYAGE_API_KEY),
            ProviderKind::Hash => None,
        };

        Ok(Self {
            provider,
            api_key: get(env_vars::API_KEY).or(fallback_key),
            model: get(env_vars::MODEL),
            base_url: get(env_vars::BASE_URL),
            timeout: parse_var(&get, env_vars::TIMEOUT_SECS)?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            hash_dimension: parse_var(&get, env_vars::HASH_DIMENSION)?.unwrap_or(defaults.hash_dimension),
            chunk_size: parse_var(&get, env_vars::CHUNK_SIZE)?.unwrap_or(defaults.chunk_size),
            chunk_overlap: parse_var(&get, env_vars::CHUNK_OVERLAP)?.unwrap_or(defaults.chunk_overlap),
            log_level: parse_var(&get, env_vars::LOG)?.unwrap_or(defaults.log_level),
        })
    }

    pub fn splitter(&self) -> Result<CharacterTextSplitter, DomainError> {
        CharacterTextSplitter::new(self.chunk_size, self.chunk_overlap)
    }

    pub fn embedding_provider(&self) -> Result<Arc<dyn EmbeddingProvider>, DomainError> {
        let provider: Arc<dyn EmbeddingProvider> = match self.provider {
            ProviderKind::OpenAi => Arc::new(
                OpenAiProvider::new(self.require_api_key()?, self.model.clone(), self.base_url.clone())
                    .with_timeout(self.timeout),
            ),
            ProviderKind::Voyage => Arc::new(
                VoyageProvider::new(self.require_api_key()?, self.model.clone(), self.base_url.clone())
                    .with_timeout(self.timeout),
            ),
            ProviderKind::Hash => Arc::new(HashProvider::new(self.hash_dimension)?),
        };
        Ok(provider)
    }

    fn require_api_key(&self) -> Result<String, DomainError> {
        self.api_key.clone().ok_or_else(|| {
            DomainError::Config(format!(
                "{} requires an API key; set {}",
                self.provider,
                env_vars::API_KEY
            ))
        })
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| DomainError::Config(format!("Invalid {key}='{raw}': {e}")))
        })
        .transpose()
}
