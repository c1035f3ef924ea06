use sift_core::{SiftError, TextSource};
use std::collections::HashMap;
use std::fs;

/// Reads documents from the local filesystem.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// tokenizer treats the replacement character as a separator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl TextSource for FsSource {
    fn read_all(&self, path: &str) -> Result<String, SiftError> {
        let bytes = fs::read(path).map_err(|e| SiftError::read(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Serves documents from memory, keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    texts: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous text for the same path.
    pub fn with(mut self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: &str, text: &str) {
        self.texts.insert(path.to_string(), text.to_string());
    }
}

impl TextSource for MemorySource {
    fn read_all(&self, path: &str) -> Result<String, SiftError> {
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| SiftError::read(path, "no such document"))
    }
}
