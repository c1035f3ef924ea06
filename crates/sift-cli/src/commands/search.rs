use crate::{Cli, OutputFormat};
use anyhow::Result;
use sift_render::{JsonlWriter, render_json, render_text};
use std::io::Write;
use std::path::PathBuf;

pub fn run(
    cli: &Cli,
    query: &str,
    paths: &[PathBuf],
    max_results: usize,
    format: OutputFormat,
) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Please enter a search query.");
    }

    let engine = super::load_engine(cli, paths)?;
    let limit = (max_results > 0).then_some(max_results);
    let results = engine.search(query, limit);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(out, "No matches found.")?;
            } else {
                write!(out, "{}", render_text(&results))?;
            }
        }
        OutputFormat::Jsonl => {
            JsonlWriter::new(query)
                .max_results(limit)
                .write_to(&mut out, &results, engine.count())?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(&results)?)?;
        }
    }

    if !cli.is_quiet() {
        eprintln!("Found {} result(s) for '{}'", results.len(), query);
    }

    Ok(())
}
