use thiserror::Error;

use super::encoder::EncodeError;

/// Store writer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Payload is neither PEM-armored nor DER. Nothing is written.
    #[error("unrecognised data type from {0}")]
    UnrecognizedEncoding(String),

    /// Conversion output did not carry the PEM header. Nothing is written.
    #[error("bad CRL data from {0}")]
    BadData(String),

    #[error("CRL conversion failed: {0}")]
    Convert(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
