use thiserror::Error;

use crate::store::StoreError;

/// Fetch-side errors. All of these are non-fatal to the run: a per-URL error
/// advances the fetcher to the next candidate, and a per-CA error (the last
/// URL's failure) is logged while the remaining CAs are still processed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid CRL URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error {status} when fetching CRL from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("timeout while fetching CRL")]
    Timeout,

    #[error("cannot read URL file for {ca}: {source}")]
    SourceRead {
        ca: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetched bytes were rejected by the store (unrecognized encoding, bad
    /// conversion output, or a commit failure). Treated exactly like a fetch
    /// failure for fallback purposes.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenient Result type alias
pub type FetchResult<T> = Result<T, FetchError>;
