//! CRL fetching: per-CA candidate URL fallback over a pluggable transport.

mod errors;
mod fetcher;
mod source;
mod sources;

// Re-export public types
pub use errors::{FetchError, FetchResult};
pub use fetcher::{CrlFetcher, RefreshOutcome};
pub use source::{CrlSource, HttpSource};
