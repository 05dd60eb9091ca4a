use std::path::Path;

use tokio::fs;

use super::errors::{FetchError, FetchResult};

/// Parse the body of a `.crl_url` descriptor: one candidate URL per line, in
/// file order. Blank lines and `#` comments are skipped after trimming.
pub fn parse_candidate_urls(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and parse the descriptor for `ca` at `path`. A missing or unreadable
/// descriptor counts as a total fetch failure for that CA.
pub async fn read_candidate_urls(path: &Path, ca: &str) -> FetchResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FetchError::SourceRead {
            ca: ca.to_string(),
            source,
        })?;
    Ok(parse_candidate_urls(&content))
}
