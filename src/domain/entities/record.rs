/// One embedded chunk of the corpus. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    text: String,
    embedding: Vec<f32>,
}

impl Record {
    pub fn new(text: String, embedding: Vec<f32>) -> Self {
        Self { text, embedding }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }

    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}
