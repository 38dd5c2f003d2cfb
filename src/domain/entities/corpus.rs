//! The embedded corpus: an ordered, immutable snapshot of records.
//!
//! A [`Corpus`] is built in one piece and never edited. Every record shares
//! the same dimension, which is checked on construction, so ranking only
//! has to compare the query against that one dimension.

use crate::domain::entities::record::Record;
use crate::domain::error::DomainError;
use crate::domain::values::search_output::ScoredText;
use crate::domain::values::similarity::{cosine_similarity, is_finite_vector};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<Record>,
    dimension: usize,
}

impl Corpus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a corpus from records that all share one non-zero dimension.
    pub fn new(records: Vec<Record>) -> Result<Self, DomainError> {
        let Some(first) = records.first() else {
            return Ok(Self::empty());
        };
        let dimension = first.dimension();
        if dimension == 0 {
            return Err(DomainError::InvalidInput(
                "Embeddings must have at least one dimension".into(),
            ));
        }
        for (i, record) in records.iter().enumerate() {
            if record.dimension() != dimension {
                return Err(DomainError::InvalidInput(format!(
                    "Record {i} has {} dimensions, expected {dimension}",
                    record.dimension()
                )));
            }
            if !is_finite_vector(record.embedding()) {
                return Err(DomainError::InvalidInput(format!(
                    "Record {i} has a non-finite embedding value"
                )));
            }
        }
        Ok(Self { records, dimension })
    }

    /// Pairs texts with their embeddings positionally.
    pub fn from_pairs(texts: Vec<String>, embeddings: Vec<Vec<f32>>) -> Result<Self, DomainError> {
        if texts.len() != embeddings.len() {
            return Err(DomainError::InvalidInput(format!(
                "Got {} texts but {} embeddings",
                texts.len(),
                embeddings.len()
            )));
        }
        let records = texts
            .into_iter()
            .zip(embeddings)
            .map(|(text, embedding)| Record::new(text, embedding))
            .collect();
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dimension shared by all records, `None` for an empty corpus.
    pub fn dimension(&self) -> Option<usize> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.dimension)
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Top `k` records by cosine similarity to `query`, best first.
    ///
    /// Equal scores keep insertion order. An empty corpus ranks to an
    /// empty list whatever the query.
    pub fn rank(&self, query: &[f32], k: usize) -> Result<Vec<ScoredText>, DomainError> {
        if k == 0 {
            return Err(DomainError::InvalidInput("k must be at least 1".into()));
        }
        if self.records.is_empty() {
            return Ok(vec![]);
        }
        if query.len() != self.dimension {
            return Err(DomainError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        if !is_finite_vector(query) {
            return Err(DomainError::InvalidInput(
                "Query vector contains a non-finite value".into(),
            ));
        }

        let mut scored: Vec<(usize, f64)> = Vec::with_capacity(self.records.len());
        for (i, record) in self.records.iter().enumerate() {
            scored.push((i, cosine_similarity(record.embedding(), query)?));
        }

        // Score descending, then position ascending: a total order, so the
        // partial selection below picks the same k as a full stable sort.
        let by_rank = |a: &(usize, f64), b: &(usize, f64)| -> Ordering {
            b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
        };
        if k < scored.len() {
            scored.select_nth_unstable_by(k - 1, by_rank);
            scored.truncate(k);
        }
        scored.sort_by(by_rank);

        Ok(scored
            .into_iter()
            .map(|(i, score)| ScoredText {
                text: self.records[i].text().to_string(),
                score,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pairs: &[(&str, Vec<f32>)]) -> Corpus {
        Corpus::from_pairs(
            pairs.iter().map(|(t, _)| t.to_string()).collect(),
            pairs.iter().map(|(_, v)| v.clone()).collect(),
        )
        .unwrap()
    }

    fn texts(results: &[ScoredText]) -> Vec<&str> {
        results.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_rank_orders_by_similarity_descending() {
        let c = corpus(&[
            ("far", vec![0.0, 1.0]),
            ("near", vec![1.0, 0.1]),
            ("mid", vec![1.0, 1.0]),
        ]);
        let results = c.rank(&[1.0, 0.0], 3).unwrap();
        assert_eq!(texts(&results), vec!["near", "mid", "far"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_truncates_to_k() {
        let c = corpus(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![0.9, 0.1]),
            ("c", vec![0.0, 1.0]),
        ]);
        let results = c.rank(&[1.0, 0.0], 2).unwrap();
        assert_eq!(texts(&results), vec!["a", "b"]);
    }

    #[test]
    fn test_k_larger_than_corpus_returns_everything() {
        let c = corpus(&[("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])]);
        assert_eq!(c.rank(&[1.0, 0.0], 10).unwrap().len(), 2);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let c = corpus(&[
            ("first", vec![1.0, 1.0]),
            ("best", vec![1.0, 0.0]),
            ("second", vec![2.0, 2.0]),
            ("third", vec![0.5, 0.5]),
        ]);
        let results = c.rank(&[1.0, 0.0], 4).unwrap();
        assert_eq!(texts(&results), vec!["best", "first", "second", "third"]);

        // Partial selection must agree with the full ordering.
        let results = c.rank(&[1.0, 0.0], 3).unwrap();
        assert_eq!(texts(&results), vec!["best", "first", "second"]);
    }

    #[test]
    fn test_zero_vector_record_ranks_as_zero() {
        let c = corpus(&[("zero", vec![0.0, 0.0]), ("neg", vec![-1.0, 0.0])]);
        let results = c.rank(&[1.0, 0.0], 2).unwrap();
        assert_eq!(texts(&results), vec!["zero", "neg"]);
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_empty_corpus_ranks_to_nothing() {
        let c = Corpus::empty();
        assert!(c.rank(&[1.0, 2.0, 3.0], 3).unwrap().is_empty());
        assert_eq!(c.dimension(), None);
    }

    #[test]
    fn test_dimension_mismatch() {
        let c = corpus(&[("a", vec![1.0, 0.0, 0.0])]);
        let err = c.rank(&[1.0, 0.0], 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::DimensionMismatch { expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn test_zero_k_rejected() {
        let c = corpus(&[("a", vec![1.0])]);
        assert!(matches!(c.rank(&[1.0], 0), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_query_rejected() {
        let c = corpus(&[("a", vec![1.0, 0.0])]);
        assert!(matches!(
            c.rank(&[f32::NAN, 0.0], 1),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mixed_dimensions_rejected() {
        let err = Corpus::from_pairs(
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 0.0], vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = Corpus::from_pairs(vec!["a".into()], vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Corpus::from_pairs(vec!["a".into()], vec![vec![]]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
