use openssl::x509::X509Crl;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("OpenSSL error: {0}")]
    Openssl(#[from] openssl::error::ErrorStack),

    #[error("invalid CRL: {0}")]
    Invalid(String),
}

/// Re-encoding of a binary (DER) CRL into its PEM-armored form.
///
/// ASN.1/X.509 parsing is security-critical and deliberately not reimplemented
/// here; the production encoder delegates to OpenSSL. The trait exists so the
/// store writer can be tested without a real cryptographic toolkit.
pub trait CrlEncoder: Send + Sync {
    fn der_to_pem(&self, der: &[u8]) -> Result<Vec<u8>, EncodeError>;
}

/// Decode a DER CRL and re-encode it as PEM via OpenSSL.
pub struct OpensslEncoder;

impl CrlEncoder for OpensslEncoder {
    fn der_to_pem(&self, der: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let crl = X509Crl::from_der(der)?;
        Ok(crl.to_pem()?)
    }
}
