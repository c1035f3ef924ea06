use crate::jsonl::ResultEntry;
use sift_core::SearchResult;

/// Render results for a terminal: name, score to four decimals, and path,
/// one blank line between entries.
pub fn render_text(results: &[SearchResult<'_>]) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}\nScore: {}\n{}\n",
            result.name(),
            format_score(result.score),
            result.path()
        ));
    }
    out
}

/// Format a score with four decimal places.
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

/// Render results as a single pretty-printed JSON array.
pub fn render_json(results: &[SearchResult<'_>]) -> anyhow::Result<String> {
    let entries: Vec<ResultEntry<'_>> = results.iter().map(ResultEntry::from).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
