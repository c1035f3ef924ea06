use sift_core::{Document, Token};
use std::collections::HashMap;

/// Aggregate statistics over a set of documents.
pub struct CorpusStats {
    pub total_docs: usize,
    pub total_terms: usize,
    pub avg_doc_length: f64,
    pub doc_frequencies: HashMap<Token, usize>,
    /// Occurrences of each term summed over all documents.
    pub collection_frequencies: HashMap<Token, u64>,
}

impl CorpusStats {
    /// Build corpus stats from a set of documents.
    pub fn from_documents<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut total_docs = 0usize;
        let mut total_terms = 0usize;
        let mut doc_frequencies: HashMap<Token, usize> = HashMap::new();
        let mut collection_frequencies: HashMap<Token, u64> = HashMap::new();

        for doc in docs {
            total_docs += 1;
            total_terms += doc.total_terms();
            for (term, &count) in doc.term_frequencies() {
                *doc_frequencies.entry(term.clone()).or_default() += 1;
                *collection_frequencies.entry(term.clone()).or_default() += count as u64;
            }
        }

        let avg_doc_length = if total_docs > 0 {
            total_terms as f64 / total_docs as f64
        } else {
            0.0
        };

        Self {
            total_docs,
            total_terms,
            avg_doc_length,
            doc_frequencies,
            collection_frequencies,
        }
    }

    /// Number of distinct terms across the corpus.
    pub fn unique_terms(&self) -> usize {
        self.doc_frequencies.len()
    }

    /// The `n` most frequent terms, highest first, ties alphabetical.
    pub fn top_terms(&self, n: usize) -> Vec<(&str, u64)> {
        let mut terms: Vec<(&str, u64)> = self
            .collection_frequencies
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(n);
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    fn sample_docs() -> Vec<Document> {
        vec![
            Document::from_tokens("a.txt", analyze("cat cat dog")),
            Document::from_tokens("b.txt", analyze("dog bird")),
            Document::from_tokens("c.txt", analyze("the and of")),
        ]
    }

    #[test]
    fn corpus_stats_counts() {
        let docs = sample_docs();
        let stats = CorpusStats::from_documents(&docs);
        assert_eq!(stats.total_docs, 3);
        assert_eq!(stats.total_terms, 5);
        assert_eq!(stats.unique_terms(), 3);
        assert_eq!(stats.doc_frequencies.get("dog"), Some(&2));
        assert_eq!(stats.doc_frequencies.get("cat"), Some(&1));
    }

    #[test]
    fn corpus_stats_average_length() {
        let docs = sample_docs();
        let stats = CorpusStats::from_documents(&docs);
        assert!((stats.avg_doc_length - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn corpus_stats_top_terms() {
        let docs = sample_docs();
        let stats = CorpusStats::from_documents(&docs);
        // cat and dog both occur twice; alphabetical tie-break
        assert_eq!(stats.top_terms(2), vec![("cat", 2), ("dog", 2)]);
        assert_eq!(stats.top_terms(10).len(), 3);
    }

    #[test]
    fn corpus_stats_empty() {
        let stats = CorpusStats::from_documents(&[]);
        assert_eq!(stats.total_docs, 0);
        assert_eq!(stats.avg_doc_length, 0.0);
        assert!(stats.top_terms(5).is_empty());
    }
}
