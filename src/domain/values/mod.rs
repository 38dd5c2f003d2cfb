pub mod provider_kind;
pub mod search_output;
pub mod similarity;
