use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

use super::errors::{FetchError, FetchResult};

/// A transport that retrieves raw CRL bytes from a candidate URL.
///
/// The fetcher only cares about success-with-bytes or failure-with-reason, so
/// tests can script responses without a network.
#[async_trait]
pub trait CrlSource: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>>;
}

/// HTTP(S) transport over reqwest with a bounded per-request deadline.
pub struct HttpSource {
    client: Client,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(request_timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            timeout: request_timeout,
        })
    }
}

#[async_trait]
impl CrlSource for HttpSource {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        let _ = Url::parse(url)?;

        debug!("Fetching CRL from {url}");
        let response = match timeout(self.timeout, self.client.get(url).send()).await {
            Ok(result) => result?,
            Err(_) => return Err(FetchError::Timeout),
        };

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
