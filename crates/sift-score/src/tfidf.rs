use sha2::{Digest, Sha256};
use sift_core::{Document, Token};
use std::collections::HashMap;

/// Memoized document frequencies for one corpus snapshot.
///
/// Entries are filled on first lookup and never evicted. The cache records
/// the fingerprint of the documents that produced it, and a scorer handed a
/// cache for any other set of documents starts from scratch.
#[derive(Debug, Default, Clone)]
pub struct DocFrequencyCache {
    counts: HashMap<Token, usize>,
    snapshot: Option<[u8; 32]>,
}

impl DocFrequencyCache {
    /// Number of memoized terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Whether this cache was built from exactly `documents`.
    pub fn matches(&self, documents: &[Document]) -> bool {
        self.snapshot == Some(snapshot_fingerprint(documents))
    }
}

/// SHA-256 over the digests of `documents`, in order.
fn snapshot_fingerprint(documents: &[Document]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update((documents.len() as u64).to_le_bytes());
    for document in documents {
        hasher.update(document.sha256());
    }
    hasher.finalize().into()
}

/// TF-IDF scorer bound to a borrowed corpus snapshot.
///
/// TF is linear: occurrences / total terms of the document.
/// IDF is ln(N / df), and 0 when the term is absent or the corpus is empty.
pub struct TfIdfScorer<'a> {
    documents: &'a [Document],
    cache: DocFrequencyCache,
}

impl<'a> TfIdfScorer<'a> {
    pub fn new(documents: &'a [Document]) -> Self {
        Self::with_cache(documents, DocFrequencyCache::default())
    }

    /// Resume with a cache taken from an earlier scorer.
    ///
    /// The cache is kept only if it was built from these exact documents;
    /// otherwise it is dropped and frequencies are recomputed on demand.
    pub fn with_cache(documents: &'a [Document], cache: DocFrequencyCache) -> Self {
        let fingerprint = snapshot_fingerprint(documents);
        let cache = if cache.snapshot == Some(fingerprint) {
            cache
        } else {
            DocFrequencyCache {
                counts: HashMap::new(),
                snapshot: Some(fingerprint),
            }
        };
        Self { documents, cache }
    }

    /// Release the memoized frequencies so a later scorer over the same
    /// snapshot can reuse them.
    pub fn into_cache(self) -> DocFrequencyCache {
        self.cache
    }

    pub fn total_documents(&self) -> usize {
        self.documents.len()
    }

    /// Share of `document`'s terms that are `term`.
    pub fn term_frequency(&self, term: &str, document: &Document) -> f64 {
        let total = document.total_terms();
        if total == 0 {
            return 0.0;
        }
        match document.occurrences(term) {
            0 => 0.0,
            count => count as f64 / total as f64,
        }
    }

    /// Number of documents containing `term`, computed once per scorer.
    pub fn document_frequency(&mut self, term: &str) -> usize {
        if let Some(&df) = self.cache.counts.get(term) {
            return df;
        }

        let df = self
            .documents
            .iter()
            .filter(|doc| doc.contains(term))
            .count();
        self.cache.counts.insert(term.to_string(), df);
        df
    }

    pub fn inverse_document_frequency(&mut self, term: &str) -> f64 {
        let df = self.document_frequency(term);
        let n = self.total_documents();
        if df == 0 || n == 0 {
            return 0.0;
        }
        (n as f64 / df as f64).ln()
    }

    /// TF-IDF of a single term in a document.
    pub fn score(&mut self, term: &str, document: &Document) -> f64 {
        let tf = self.term_frequency(term, document);
        if tf == 0.0 {
            return 0.0;
        }
        tf * self.inverse_document_frequency(term)
    }

    /// Sum of per-term scores. Repeated terms count once per occurrence.
    pub fn score_terms(&mut self, terms: &[Token], document: &Document) -> f64 {
        terms.iter().map(|term| self.score(term, document)).sum()
    }
}
