use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;

/// A normalized search term: lowercase, at least two characters.
pub type Token = String;

/// An ingested document and its term statistics.
///
/// Built once from the filtered token stream and never modified afterwards.
/// `total_terms` always equals the sum of the term table's counts, and the
/// table holds no zero counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: String,
    name: String,
    tokens: Vec<Token>,
    term_frequencies: HashMap<Token, u32>,
    total_terms: usize,
    sha256: [u8; 32],
}

impl Document {
    /// Build a document from its source path and post-filter tokens.
    pub fn from_tokens(path: &str, tokens: Vec<Token>) -> Self {
        let mut term_frequencies: HashMap<Token, u32> = HashMap::new();
        for token in &tokens {
            *term_frequencies.entry(token.clone()).or_default() += 1;
        }

        let mut hasher = Sha256::new();
        hasher.update(path.as_bytes());
        hasher.update([0u8]);
        for token in &tokens {
            hasher.update(token.as_bytes());
            hasher.update(b"\n");
        }

        Self {
            path: path.to_string(),
            name: display_name(path),
            sha256: hasher.finalize().into(),
            total_terms: tokens.len(),
            tokens,
            term_frequencies,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name component of the path, used when showing the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Post-filter tokens in document order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn term_frequencies(&self) -> &HashMap<Token, u32> {
        &self.term_frequencies
    }

    pub fn total_terms(&self) -> usize {
        self.total_terms
    }

    /// Number of times `term` occurs in this document.
    pub fn occurrences(&self, term: &str) -> u32 {
        self.term_frequencies.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.term_frequencies.contains_key(term)
    }

    /// SHA-256 over the path and the token stream. Two documents with the
    /// same digest have identical term statistics.
    pub fn sha256(&self) -> &[u8; 32] {
        &self.sha256
    }

    /// Number of distinct terms.
    pub fn unique_terms(&self) -> usize {
        self.term_frequencies.len()
    }
}

/// Derive a display name from a path: its final component, or the whole
/// path when it has none.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// A document matched by a query together with its relevance score.
///
/// Borrows the document from the engine's store, so results cannot outlive
/// the corpus state they were computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<'a> {
    pub document: &'a Document,
    pub score: f64,
}

impl<'a> SearchResult<'a> {
    pub fn path(&self) -> &'a str {
        self.document.path()
    }

    pub fn name(&self) -> &'a str {
        self.document.name()
    }
}
