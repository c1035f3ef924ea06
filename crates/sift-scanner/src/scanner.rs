use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Settings for turning directories into document paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File extensions to keep, without the dot. Empty keeps every file.
    pub extensions: Vec<String>,
    /// Descend into hidden files and directories.
    pub include_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string()],
            include_hidden: false,
        }
    }
}

impl ScanOptions {
    /// Options that keep every file regardless of extension.
    pub fn all_files() -> Self {
        Self {
            extensions: Vec::new(),
            ..Self::default()
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
    }
}

/// Walks a directory tree, respecting .gitignore rules, and collects the
/// paths of documents to ingest.
pub struct Scanner<'a> {
    root: &'a Path,
    options: &'a ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &'a Path, options: &'a ScanOptions) -> Self {
        Self { root, options }
    }

    /// Scan the directory tree and return matching file paths, sorted.
    pub fn scan(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(self.root)
            .hidden(!self.options.include_hidden)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if !self.options.accepts(path) {
                continue;
            }

            files.push(path.to_string_lossy().to_string());
        }

        // Sort by path for deterministic ingestion order
        files.sort();
        Ok(files)
    }
}

/// Expand command-line inputs into document paths.
///
/// Directories are scanned; anything else is passed through unchanged so
/// that missing files surface as ingestion failures.
pub fn expand_paths(inputs: &[PathBuf], options: &ScanOptions) -> anyhow::Result<Vec<String>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = Scanner::new(input, options).scan()?;
            tracing::debug!(dir = %input.display(), files = found.len(), "scanned directory");
            paths.extend(found);
        } else {
            paths.push(input.to_string_lossy().to_string());
        }
    }
    Ok(paths)
}
