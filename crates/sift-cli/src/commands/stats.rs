use crate::Cli;
use anyhow::Result;
use sift_score::CorpusStats;
use std::path::PathBuf;

pub fn run(cli: &Cli, paths: &[PathBuf], top: usize) -> Result<()> {
    let engine = super::load_engine(cli, paths)?;
    let stats = CorpusStats::from_documents(engine.documents());

    println!("Documents: {}", stats.total_docs);
    println!("Unique terms: {}", stats.unique_terms());
    println!("Total terms: {}", stats.total_terms);
    println!("Avg doc length: {:.1}", stats.avg_doc_length);

    let top_terms = stats.top_terms(top);
    if !top_terms.is_empty() {
        println!();
        println!("Most frequent terms:");
        for (term, count) in &top_terms {
            let docs = stats.doc_frequencies.get(*term).copied().unwrap_or(0);
            println!("  {term:<20} {count:>8}  ({docs} docs)");
        }
    }

    Ok(())
}
