use crate::domain::error::DomainError;
use std::path::Path;

pub fn load_text_file(path: &Path) -> Result<String, DomainError> {
    std::fs::read_to_string(path)
        .map_err(|e| DomainError::Io(format!("Failed to read {}: {e}", path.display())))
}

/// Reads every file in order, skipping none; the first failure aborts.
pub fn load_text_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, DomainError> {
    paths.iter().map(|p| load_text_file(p.as_ref())).collect()
}
