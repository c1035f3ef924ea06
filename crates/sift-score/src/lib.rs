//! Tokenization, stop-word filtering, and TF-IDF relevance scoring.

pub mod stats;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;

pub use stats::CorpusStats;
pub use stopwords::StopWordFilter;
pub use tfidf::{DocFrequencyCache, TfIdfScorer};
pub use tokenizer::Tokenizer;

use sift_core::Token;

/// Tokenize and stop-word filter `text`.
///
/// Documents and queries both go through this, so their terms line up.
pub fn analyze(text: &str) -> Vec<Token> {
    StopWordFilter::new().filter(Tokenizer::tokenize(text))
}
