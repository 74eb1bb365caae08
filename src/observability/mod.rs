//! Observability subsystem for csvql
//!
//! Structured JSON logging only:
//! - One log line = one event
//! - Synchronous, no buffering, no background threads
//! - Deterministic key ordering
//! - No side effects on query evaluation

mod logger;

pub use logger::{Logger, Severity};
