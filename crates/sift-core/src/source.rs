use crate::SiftError;

/// Read primitive the document store ingests through.
///
/// Implementations decide how a path is resolved. An error, or an empty
/// string, counts as an ingestion failure for that path.
pub trait TextSource {
    /// Read the full text behind `path`.
    fn read_all(&self, path: &str) -> Result<String, SiftError>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read_all(&self, path: &str) -> Result<String, SiftError> {
        (**self).read_all(path)
    }
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn read_all(&self, path: &str) -> Result<String, SiftError> {
        (**self).read_all(path)
    }
}
