use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Voyage,
    /// Offline, deterministic token hashing
    #[default]
    Hash,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Voyage => write!(f, "voyage"),
            Self::Hash => write!(f, "hash"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "voyage" => Ok(Self::Voyage),
            "hash" | "local" => Ok(Self::Hash),
            _ => Err(format!(
                "Unknown embedding provider: '{s}'. Use 'openai', 'voyage' or 'hash'"
            )),
        }
    }
}
