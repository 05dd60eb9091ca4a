use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;
use tracing::debug;

use super::encoder::CrlEncoder;
use super::errors::StoreError;

/// First line of a PEM-armored CRL.
pub const PEM_HEADER: &[u8] = b"-----BEGIN X509 CRL-----";

/// Leading byte of a DER-encoded CRL (ASN.1 SEQUENCE tag).
const DER_LEADING_BYTE: u8 = 0x30;

/// Commits CRL data into the store in canonical PEM form.
///
/// Commit is atomic: the full payload is written to `<ca>.<crl_ext>.tmp` and
/// then renamed onto `<ca>.<crl_ext>`, so a concurrent reader sees either the
/// complete old CRL or the complete new one, never a mix. No locking is
/// needed; rename-replace semantics carry the whole guarantee.
pub struct StoreWriter {
    base: PathBuf,
    crl_ext: String,
    encoder: Arc<dyn CrlEncoder>,
}

impl StoreWriter {
    pub fn new(base: PathBuf, crl_ext: impl Into<String>, encoder: Arc<dyn CrlEncoder>) -> Self {
        Self {
            base,
            crl_ext: crl_ext.into(),
            encoder,
        }
    }

    /// Path of the committed CRL file for `ca`.
    pub fn crl_path(&self, ca: &str) -> PathBuf {
        self.base.join(format!("{ca}.{}", self.crl_ext))
    }

    fn tmp_path(&self, ca: &str) -> PathBuf {
        self.base.join(format!("{ca}.{}.tmp", self.crl_ext))
    }

    /// Normalize `data` to PEM. PEM passes through untouched; DER is
    /// re-encoded; anything else is rejected before any filesystem write.
    fn normalize(&self, ca: &str, data: Vec<u8>) -> Result<Vec<u8>, StoreError> {
        if data.starts_with(PEM_HEADER) {
            return Ok(data);
        }
        if data.first() != Some(&DER_LEADING_BYTE) {
            return Err(StoreError::UnrecognizedEncoding(ca.to_string()));
        }
        debug!("Converting {ca} CRL data from DER to PEM");
        let pem = self.encoder.der_to_pem(&data)?;
        // Conversion output is untrusted until it carries the armor header
        if !pem.starts_with(PEM_HEADER) {
            return Err(StoreError::BadData(ca.to_string()));
        }
        Ok(pem)
    }

    /// Normalize and durably commit `data` as the CRL for `ca`.
    pub async fn commit(&self, ca: &str, data: Vec<u8>) -> Result<(), StoreError> {
        let pem = self.normalize(ca, data)?;
        let tmp = self.tmp_path(ca);
        let dest = self.crl_path(ca);
        debug!("Writing temp CRL file {}", tmp.display());
        fs::write(&tmp, &pem).await?;
        debug!("Renaming temp CRL onto {}", dest.display());
        fs::rename(&tmp, &dest).await?;
        Ok(())
    }
}
