use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::scan::{ScanError, files_with_extension};
use crate::store::StoreWriter;

use super::errors::FetchResult;
use super::source::CrlSource;
use super::sources::read_candidate_urls;

/// Result of one CA's refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A candidate URL yielded data that was committed to the store.
    Updated,
    /// The descriptor held no candidate URLs. Not an error.
    NoCandidates,
}

/// Walks a CA's candidate URLs in file order and commits the first payload
/// the store accepts.
pub struct CrlFetcher {
    base: PathBuf,
    url_ext: String,
    source: Arc<dyn CrlSource>,
}

impl CrlFetcher {
    pub fn new(base: PathBuf, url_ext: impl Into<String>, source: Arc<dyn CrlSource>) -> Self {
        Self {
            base,
            url_ext: url_ext.into(),
            source,
        }
    }

    /// CAs with a URL descriptor in the base directory. A listing failure is
    /// fatal to the run.
    pub async fn discover(&self) -> Result<Vec<String>, ScanError> {
        files_with_extension(&self.base, &self.url_ext).await
    }

    /// Refresh the CRL for one CA. Every candidate failure, including a store
    /// rejection of fetched bytes, advances to the next URL; if all candidates
    /// fail, only the last error is surfaced.
    pub async fn refresh_ca(&self, ca: &str, store: &StoreWriter) -> FetchResult<RefreshOutcome> {
        let descriptor = self.base.join(format!("{ca}.{}", self.url_ext));
        let urls = read_candidate_urls(&descriptor, ca).await?;

        let mut last_error = None;
        for url in &urls {
            debug!("Trying URL {url} for {ca}");
            match self.try_url(url, ca, store).await {
                Ok(()) => return Ok(RefreshOutcome::Updated),
                Err(e) => {
                    debug!("Intermediate error for {ca}: {e}");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            None => Ok(RefreshOutcome::NoCandidates),
            Some(e) => Err(e),
        }
    }

    async fn try_url(&self, url: &str, ca: &str, store: &StoreWriter) -> FetchResult<()> {
        let data = self.source.fetch(url).await?;
        store.commit(ca, data).await?;
        Ok(())
    }
}
