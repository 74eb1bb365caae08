//! CSV Loader subsystem for csvql
//!
//! Parses raw CSV text into an immutable `Table` (headers + rows).
//!
//! # Guarantees
//!
//! - Every row has exactly `headers.len()` cells after loading
//! - Quoted fields may contain commas, escaped quotes, and newlines
//! - Whitespace-only lines produce no rows
//! - Tables are never mutated after loading
//!
//! The loader performs no I/O. Raw text is handed in already
//! materialized; fetching it is the source subsystem's job.

mod errors;
mod parser;
mod table;

pub use errors::{LoaderError, LoaderErrorCode, LoaderResult};
pub use parser::CsvParser;
pub use table::Table;
