use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, warn};

use crate::scan::{ScanError, files_with_extension};

/// Keeps `<hash>.<crl_ext>` symlinks in step with the `<hash>.<ca_ext>`
/// identity links, so a verifier can resolve a certificate hash straight to
/// its CA's CRL file.
///
/// The revocation links are fully derived state. Reconciliation never reads
/// CRL content; it only mirrors the identity link with the CRL extension
/// substituted for the certificate extension, repairing (delete + recreate)
/// anything that points elsewhere or is not a symlink at all.
pub struct LinkReconciler {
    base: PathBuf,
    ca_ext: String,
    crl_ext: String,
}

impl LinkReconciler {
    pub fn new(base: PathBuf, ca_ext: impl Into<String>, crl_ext: impl Into<String>) -> Self {
        Self {
            base,
            ca_ext: ca_ext.into(),
            crl_ext: crl_ext.into(),
        }
    }

    /// Reconcile every discovered identity link. Idempotent: a second run
    /// with unchanged identity links makes no filesystem changes. Per-entry
    /// failures are logged and do not stop the remaining entries; only the
    /// directory listing itself is fatal.
    pub async fn reconcile(&self) -> Result<(), ScanError> {
        for hash in files_with_extension(&self.base, &self.ca_ext).await? {
            if let Err(e) = self.reconcile_entry(&hash).await {
                warn!("Failed to reconcile CRL link for {hash}: {e}");
            }
        }
        Ok(())
    }

    async fn reconcile_entry(&self, hash: &str) -> std::io::Result<()> {
        let cert_link = self.base.join(format!("{hash}.{}", self.ca_ext));
        let meta = fs::symlink_metadata(&cert_link).await?;
        if !meta.file_type().is_symlink() {
            warn!(
                path = %cert_link.display(),
                "Unexpected file (should be a symlink), skipping"
            );
            return Ok(());
        }

        // <hash>.0 -> <ca>.pem implies <hash>.r0 -> <ca>.r0
        let cert_target = fs::read_link(&cert_link).await?;
        let crl_target = cert_target.with_extension(&self.crl_ext);
        let crl_link = self.base.join(format!("{hash}.{}", self.crl_ext));

        match fs::symlink_metadata(&crl_link).await {
            Ok(meta) => {
                if meta.file_type().is_symlink()
                    && fs::read_link(&crl_link).await? == crl_target
                {
                    debug!("CRL link {} is OK", crl_link.display());
                    return Ok(());
                }
                debug!("Deleting bad CRL link {}", crl_link.display());
                fs::remove_file(&crl_link).await?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        debug!(
            "Linking CRL {} -> {}",
            crl_link.display(),
            crl_target.display()
        );
        fs::symlink(&crl_target, &crl_link).await
    }
}
