use crate::store::{DocumentStore, IngestOutcome};
use sift_core::{Document, SearchResult, TextSource};
use sift_scanner::FsSource;
use sift_score::{DocFrequencyCache, TfIdfScorer, analyze};
use std::cell::RefCell;

/// Ranks the documents of an owned corpus against free-text queries.
///
/// Document frequencies are memoized between searches and thrown away on
/// every corpus change. The store is private, so the only mutation paths are
/// the methods below, and each of them resets the cache.
///
/// The engine does no locking of its own; share it across threads behind a
/// `Mutex` if needed.
pub struct SearchEngine<S = FsSource> {
    store: DocumentStore<S>,
    df_cache: RefCell<DocFrequencyCache>,
}

impl SearchEngine<FsSource> {
    /// Engine that reads documents from the local filesystem.
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl Default for SearchEngine<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSource> SearchEngine<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            store: DocumentStore::new(source),
            df_cache: RefCell::default(),
        }
    }

    /// Ingest one path; `true` if it is now part of the corpus.
    pub fn ingest(&mut self, path: &str) -> bool {
        self.ingest_document(path).is_success()
    }

    /// Ingest one path and report the detailed outcome.
    pub fn ingest_document(&mut self, path: &str) -> IngestOutcome {
        let outcome = self.store.ingest_document(path);
        if matches!(outcome, IngestOutcome::Added) {
            self.invalidate();
        }
        outcome
    }

    /// Ingest every path, continuing past failures. Returns the success count.
    pub fn ingest_many<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let before = self.store.count();
        let succeeded = self.store.ingest_many(paths);
        if self.store.count() != before {
            self.invalidate();
        }
        succeeded
    }

    /// Rank documents by summed TF-IDF over the query's terms.
    ///
    /// Only documents scoring above zero are returned, best first; equal
    /// scores keep insertion order. `max_results` of `None` or `Some(0)`
    /// returns every match.
    pub fn search(&self, query: &str, max_results: Option<usize>) -> Vec<SearchResult<'_>> {
        if query.is_empty() || self.store.is_empty() {
            return Vec::new();
        }

        let terms = analyze(query);
        if terms.is_empty() {
            tracing::debug!(query, "query has no searchable terms");
            return Vec::new();
        }

        let documents = self.store.documents();
        let mut scorer = TfIdfScorer::with_cache(documents, self.df_cache.take());

        let mut results: Vec<SearchResult<'_>> = documents
            .iter()
            .filter_map(|document| {
                let score = scorer.score_terms(&terms, document);
                (score > 0.0).then_some(SearchResult { document, score })
            })
            .collect();

        *self.df_cache.borrow_mut() = scorer.into_cache();

        // Stable sort: ties stay in insertion order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let matched = results.len();
        if let Some(limit) = max_results.filter(|&n| n > 0) {
            results.truncate(limit);
        }

        tracing::debug!(
            query,
            terms = terms.len(),
            matched,
            returned = results.len(),
            "search complete"
        );
        results
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Remove every document.
    pub fn clear(&mut self) {
        self.store.clear();
        self.invalidate();
    }

    /// Paths of all indexed documents, in insertion order.
    pub fn list_paths(&self) -> Vec<&str> {
        self.store.paths().collect()
    }

    pub fn document(&self, path: &str) -> Option<&Document> {
        self.store.lookup(path)
    }

    /// All indexed documents, in insertion order.
    pub fn documents(&self) -> &[Document] {
        self.store.documents()
    }

    /// Number of terms whose document frequency is currently memoized.
    pub fn cached_terms(&self) -> usize {
        self.df_cache.borrow().len()
    }

    fn invalidate(&mut self) {
        let dropped = self.df_cache.get_mut().len();
        *self.df_cache.get_mut() = DocFrequencyCache::default();
        tracing::debug!(dropped, documents = self.store.count(), "document frequency cache reset");
    }
}
