use sift_core::{Document, SiftError, TextSource};
use sift_score::analyze;
use std::collections::HashMap;

/// Result of ingesting a single path.
#[derive(Debug)]
pub enum IngestOutcome {
    /// A new document was appended to the corpus.
    Added,
    /// The path was already indexed; the corpus is unchanged.
    AlreadyPresent,
    /// The text could not be read or was empty; the corpus is unchanged.
    Failed(SiftError),
}

impl IngestOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Owns the corpus: documents in insertion order, keyed by path.
pub struct DocumentStore<S> {
    source: S,
    documents: Vec<Document>,
    by_path: HashMap<String, usize>,
}

impl<S: TextSource> DocumentStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            documents: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    /// Ingest one path, returning `true` if it is now part of the corpus.
    pub fn ingest(&mut self, path: &str) -> bool {
        self.ingest_document(path).is_success()
    }

    /// Ingest one path and report exactly what happened.
    ///
    /// The text is read before the duplicate check, so a path that can no
    /// longer be read fails even if it was indexed earlier.
    pub fn ingest_document(&mut self, path: &str) -> IngestOutcome {
        let text = match self.source.read_all(path) {
            Ok(text) if text.is_empty() => {
                let err = SiftError::EmptyDocument(path.to_string());
                tracing::warn!(path, error = %err, "ingestion failed");
                return IngestOutcome::Failed(err);
            }
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path, error = %err, "ingestion failed");
                return IngestOutcome::Failed(err);
            }
        };

        if self.by_path.contains_key(path) {
            tracing::debug!(path, "already indexed, skipping");
            return IngestOutcome::AlreadyPresent;
        }

        let document = Document::from_tokens(path, analyze(&text));
        tracing::debug!(
            path,
            terms = document.total_terms(),
            unique = document.unique_terms(),
            "indexed document"
        );

        self.by_path.insert(path.to_string(), self.documents.len());
        self.documents.push(document);
        IngestOutcome::Added
    }

    /// Ingest each path independently; returns how many succeeded.
    pub fn ingest_many<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        paths
            .into_iter()
            .filter(|path| self.ingest(path.as_ref()))
            .count()
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn lookup(&self, path: &str) -> Option<&Document> {
        self.by_path.get(path).map(|&i| &self.documents[i])
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(Document::path)
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.by_path.clear();
    }
}
