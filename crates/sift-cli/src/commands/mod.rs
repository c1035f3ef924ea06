pub mod list;
pub mod search;
pub mod stats;

use crate::Cli;
use anyhow::Result;
use sift_index::SearchEngine;
use sift_scanner::expand_paths;
use std::path::PathBuf;

/// Expand `inputs` into document paths and ingest them into a fresh engine.
pub fn load_engine(cli: &Cli, inputs: &[PathBuf]) -> Result<SearchEngine> {
    let paths = expand_paths(inputs, &cli.scan_options())?;
    if paths.is_empty() {
        anyhow::bail!("No documents found in the given paths.");
    }
    tracing::info!(inputs = inputs.len(), documents = paths.len(), "expanded inputs");

    let mut engine = SearchEngine::new();
    let indexed = engine.ingest_many(&paths);

    if !cli.is_quiet() {
        eprintln!(
            "Indexed {} of {} document(s) successfully.",
            indexed,
            paths.len()
        );
        if indexed < paths.len() {
            eprintln!(
                "Warning: some files could not be indexed. {} of {} succeeded.",
                indexed,
                paths.len()
            );
        }
    }

    if engine.count() == 0 {
        anyhow::bail!("No documents indexed. Check that the paths exist and are not empty.");
    }

    Ok(engine)
}
