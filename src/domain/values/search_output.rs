use serde::Serialize;

/// Separator placed between ranked texts when a search result is joined.
pub const JOIN_SEPARATOR: &str = "\n\n";

/// A ranked text together with its cosine similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredText {
    pub text: String,
    pub score: f64,
}

/// Result of a text search: either the ranked texts or their joined form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchOutput {
    Ranked(Vec<String>),
    Joined(String),
}

impl SearchOutput {
    pub fn from_ranked(texts: Vec<String>, join: bool) -> Self {
        if join {
            SearchOutput::Joined(texts.join(JOIN_SEPARATOR))
        } else {
            SearchOutput::Ranked(texts)
        }
    }

    pub fn as_ranked(&self) -> Option<&[String]> {
        match self {
            SearchOutput::Ranked(texts) => Some(texts),
            SearchOutput::Joined(_) => None,
        }
    }

    pub fn as_joined(&self) -> Option<&str> {
        match self {
            SearchOutput::Joined(text) => Some(text),
            SearchOutput::Ranked(_) => None,
        }
    }
}
