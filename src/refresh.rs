use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::fetch::{CrlFetcher, CrlSource, FetchResult, HttpSource, RefreshOutcome};
use crate::scan::ScanError;
use crate::store::{CrlEncoder, LinkReconciler, OpensslEncoder, StoreWriter};

/// Counters for one run. Per-CA failures are reflected here, not in the
/// process exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub refreshed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One refresh run over a hashed certificate directory: fetch and commit a
/// CRL for every CA with a URL descriptor, then reconcile the hash symlinks.
pub struct Refresher {
    fetcher: CrlFetcher,
    store: StoreWriter,
    links: LinkReconciler,
}

impl Refresher {
    /// Production wiring: HTTP transport and the OpenSSL encoder.
    pub fn new(base: PathBuf, config: &Config) -> FetchResult<Self> {
        let source = Arc::new(HttpSource::new(config.fetch.timeout())?);
        Ok(Self::with_parts(base, config, source, Arc::new(OpensslEncoder)))
    }

    /// Wiring with an injectable transport and encoder, for tests.
    pub fn with_parts(
        base: PathBuf,
        config: &Config,
        source: Arc<dyn CrlSource>,
        encoder: Arc<dyn CrlEncoder>,
    ) -> Self {
        let store = StoreWriter::new(base.clone(), config.store.crl_ext.clone(), encoder);
        let fetcher = CrlFetcher::new(base.clone(), config.store.url_ext.clone(), source);
        let links = LinkReconciler::new(
            base,
            config.store.ca_ext.clone(),
            config.store.crl_ext.clone(),
        );
        Self {
            fetcher,
            store,
            links,
        }
    }

    /// Run the fetch pass followed by the link-reconciliation pass. A failure
    /// for one CA never aborts the others; only an unlistable directory is
    /// fatal.
    pub async fn run(&self) -> Result<RunSummary, ScanError> {
        let mut summary = RunSummary::default();

        for ca in self.fetcher.discover().await? {
            debug!("Processing CA {ca}");
            match self.fetcher.refresh_ca(&ca, &self.store).await {
                Ok(RefreshOutcome::Updated) => summary.refreshed += 1,
                Ok(RefreshOutcome::NoCandidates) => {
                    debug!("No candidate URLs for {ca}");
                    summary.skipped += 1;
                }
                Err(e) => {
                    warn!("Failed to fetch {ca}: {e}");
                    summary.failed += 1;
                }
            }
        }

        debug!("Fixing CRL symlinks");
        self.links.reconcile().await?;

        info!(
            "Run complete: {} refreshed, {} skipped, {} failed",
            summary.refreshed, summary.skipped, summary.failed
        );
        Ok(summary)
    }
}
