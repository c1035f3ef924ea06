use serde::Serialize;
use sift_core::SearchResult;
use std::io::Write;

/// Output format version written in the JSONL header.
const FORMAT_VERSION: &str = "1";

/// Writes search results as JSONL: a header line, one line per result, and
/// a footer line.
pub struct JsonlWriter {
    query: String,
    max_results: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ResultEntry<'a> {
    pub(crate) path: &'a str,
    pub(crate) name: &'a str,
    pub(crate) score: f64,
}

impl<'a> From<&SearchResult<'a>> for ResultEntry<'a> {
    fn from(result: &SearchResult<'a>) -> Self {
        Self {
            path: result.path(),
            name: result.name(),
            score: result.score,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_results: usize,
    indexed_documents: usize,
}

impl JsonlWriter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            max_results: None,
        }
    }

    pub fn max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Render results as a JSONL string.
    pub fn render(&self, results: &[SearchResult<'_>], indexed: usize) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, results, indexed)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        results: &[SearchResult<'_>],
        indexed: usize,
    ) -> anyhow::Result<()> {
        let header = Header {
            version: FORMAT_VERSION,
            query: &self.query,
            max_results: self.max_results,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for result in results {
            serde_json::to_writer(&mut *writer, &ResultEntry::from(result))?;
            writeln!(writer)?;
        }

        let footer = Footer {
            total_results: results.len(),
            indexed_documents: indexed,
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
