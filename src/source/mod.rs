//! Source fetching subsystem for csvql
//!
//! Reads raw CSV text from disk with a single-level fallback chain:
//! try the primary path, on any failure try the one configured
//! fallback, and report both attempts if neither works. There is no
//! retry loop beyond that.
//!
//! All I/O in the pipeline happens here. The loader and the engine
//! receive fully materialized strings.

mod errors;
mod fetcher;

pub use errors::{SourceError, SourceResult};
pub use fetcher::SourceFetcher;
