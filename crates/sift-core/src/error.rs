/// Errors that can occur in Sift operations.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("read error: {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("empty document: {0}")]
    EmptyDocument(String),
}

impl SiftError {
    /// Build a read error for `path` from any displayable cause.
    pub fn read(path: &str, reason: impl std::fmt::Display) -> Self {
        Self::Read {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Path of the document the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::Read { path, .. } => path,
            Self::EmptyDocument(path) => path,
        }
    }
}
