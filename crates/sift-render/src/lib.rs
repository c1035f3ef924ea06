//! JSONL, JSON, and human-readable rendering of search results.

mod jsonl;
mod text;

pub use jsonl::JsonlWriter;
pub use text::{format_score, render_json, render_text};
