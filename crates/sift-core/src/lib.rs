//! Sift core domain types, traits, and errors.

mod error;
mod source;
mod types;

pub use error::SiftError;
pub use source::TextSource;
pub use types::{Document, SearchResult, Token};

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // --- Document::from_tokens ---

    #[test]
    fn document_counts_terms() {
        let doc = Document::from_tokens("a.txt", tokens(&["cat", "sat", "cat"]));
        assert_eq!(doc.occurrences("cat"), 2);
        assert_eq!(doc.occurrences("sat"), 1);
        assert_eq!(doc.occurrences("dog"), 0);
        assert_eq!(doc.unique_terms(), 2);
    }

    #[test]
    fn document_total_terms_matches_table() {
        let doc = Document::from_tokens("a.txt", tokens(&["one", "two", "two", "three"]));
        let sum: u32 = doc.term_frequencies().values().sum();
        assert_eq!(doc.total_terms(), sum as usize);
        assert!(doc.term_frequencies().values().all(|&c| c > 0));
    }

    #[test]
    fn document_keeps_token_order() {
        let doc = Document::from_tokens("a.txt", tokens(&["zebra", "apple", "zebra"]));
        assert_eq!(doc.tokens(), &["zebra", "apple", "zebra"]);
    }

    #[test]
    fn document_digest_tracks_path_and_tokens() {
        let doc = Document::from_tokens("a.txt", tokens(&["cat", "dog"]));
        let same = Document::from_tokens("a.txt", tokens(&["cat", "dog"]));
        assert_eq!(doc.sha256(), same.sha256());

        let moved = Document::from_tokens("b.txt", tokens(&["cat", "dog"]));
        let split = Document::from_tokens("a.txt", tokens(&["catdog"]));
        let edited = Document::from_tokens("a.txt", tokens(&["cat", "cat"]));
        assert_ne!(doc.sha256(), moved.sha256());
        assert_ne!(doc.sha256(), split.sha256());
        assert_ne!(doc.sha256(), edited.sha256());
    }

    #[test]
    fn document_empty_tokens() {
        let doc = Document::from_tokens("a.txt", vec![]);
        assert_eq!(doc.total_terms(), 0);
        assert_eq!(doc.unique_terms(), 0);
        assert!(!doc.contains("anything"));
    }

    // --- display name ---

    #[test]
    fn document_name_is_file_name() {
        let doc = Document::from_tokens("/home/me/notes/cats.txt", vec![]);
        assert_eq!(doc.path(), "/home/me/notes/cats.txt");
        assert_eq!(doc.name(), "cats.txt");
    }

    #[test]
    fn document_name_relative_path() {
        let doc = Document::from_tokens("docs/readme.txt", vec![]);
        assert_eq!(doc.name(), "readme.txt");
    }

    #[test]
    fn document_name_falls_back_to_path() {
        let doc = Document::from_tokens("..", vec![]);
        assert_eq!(doc.name(), "..");
    }

    // --- SearchResult ---

    #[test]
    fn search_result_exposes_document_fields() {
        let doc = Document::from_tokens("corpus/a.txt", tokens(&["cat"]));
        let result = SearchResult {
            document: &doc,
            score: 0.25,
        };
        assert_eq!(result.path(), "corpus/a.txt");
        assert_eq!(result.name(), "a.txt");
        assert_eq!(result.score, 0.25);
    }

    // --- SiftError ---

    #[test]
    fn sift_error_display() {
        let err = SiftError::read("missing.txt", "not found");
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn sift_error_path() {
        assert_eq!(SiftError::EmptyDocument("e.txt".into()).path(), "e.txt");
        assert_eq!(SiftError::read("r.txt", "denied").path(), "r.txt");
    }

    // --- TextSource ---

    struct Fixed;

    impl TextSource for Fixed {
        fn read_all(&self, path: &str) -> Result<String, SiftError> {
            Ok(format!("text of {path}"))
        }
    }

    fn read_via<S: TextSource>(source: S, path: &str) -> String {
        source.read_all(path).unwrap()
    }

    #[test]
    fn text_source_through_reference_and_box() {
        let fixed = Fixed;
        assert_eq!(read_via(&fixed, "x"), "text of x");

        let boxed: Box<dyn TextSource> = Box::new(Fixed);
        assert_eq!(read_via(boxed, "y"), "text of y");
    }
}
