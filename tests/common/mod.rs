use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crl_sync::config::Config;
use crl_sync::fetch::{CrlSource, FetchError, FetchResult};
use crl_sync::refresh::Refresher;
use crl_sync::store::{CrlEncoder, EncodeError};

pub const PEM_CRL: &[u8] = b"-----BEGIN X509 CRL-----\nMIIBmjCCAQMCAQEwDQYJ\n-----END X509 CRL-----\n";

/// Transport serving canned bodies per URL; any unknown URL times out.
pub struct ScriptedSource {
    responses: HashMap<String, Option<Vec<u8>>>,
    attempts: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(responses: &[(&str, Option<&[u8]>)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(url, body)| (url.to_string(), body.map(|b| b.to_vec())))
                .collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CrlSource for ScriptedSource {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        self.attempts.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Some(body)) => Ok(body.clone()),
            _ => Err(FetchError::Timeout),
        }
    }
}

/// Encoder returning a fixed PEM body, standing in for OpenSSL.
pub struct StaticEncoder(pub Vec<u8>);

impl CrlEncoder for StaticEncoder {
    fn der_to_pem(&self, _der: &[u8]) -> Result<Vec<u8>, EncodeError> {
        Ok(self.0.clone())
    }
}

/// Build a refresher over `dir` with default extensions and the given
/// scripted transport.
pub fn refresher(dir: &Path, source: Arc<ScriptedSource>) -> Refresher {
    let config = Config::load().expect("default config");
    Refresher::with_parts(
        dir.to_path_buf(),
        &config,
        source,
        Arc::new(StaticEncoder(PEM_CRL.to_vec())),
    )
}
