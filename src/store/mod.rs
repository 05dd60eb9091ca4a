//! On-disk CRL store for a hashed certificate directory.
//!
//! The store owns two kinds of artifacts:
//! - `<ca>.r0` files holding the canonical PEM CRL for a CA, committed via an
//!   atomic temp-write-then-rename so concurrent readers never see a torn file
//! - `<hash>.r0` symlinks mapping a certificate hash to its CA's CRL file,
//!   derived from the `<hash>.0` identity links and rebuilt on every run

mod encoder;
mod errors;
mod links;
mod writer;

// Re-export public types
pub use encoder::{CrlEncoder, EncodeError, OpensslEncoder};
pub use errors::StoreError;
pub use links::LinkReconciler;
pub use writer::StoreWriter;
