//! Text sources and directory walking with gitignore support.

mod scanner;
mod source;

pub use scanner::{ScanOptions, Scanner, expand_paths};
pub use source::{FsSource, MemorySource};
