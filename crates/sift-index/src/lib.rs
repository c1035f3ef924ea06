//! In-memory document store and TF-IDF search engine.

mod engine;
mod store;

pub use engine::SearchEngine;
pub use store::{DocumentStore, IngestOutcome};
