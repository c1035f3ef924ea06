use crate::Cli;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

pub fn run(cli: &Cli, paths: &[PathBuf]) -> Result<()> {
    let engine = super::load_engine(cli, paths)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for doc in engine.documents() {
        writeln!(
            out,
            "{:<24} {:>8} terms  {}",
            doc.name(),
            doc.total_terms(),
            doc.path()
        )?;
    }

    Ok(())
}
