//! Query Engine subsystem for csvql
//!
//! Evaluates a constrained SQL SELECT subset against a loaded table.
//!
//! # Execution flow (strict order)
//!
//! 1. Detect SELECT; anything else returns a one-row message result
//! 2. Resolve the projection (wildcard or named columns)
//! 3. Apply the single WHERE predicate, if any
//! 4. Apply ORDER BY, if any
//! 5. Apply LIMIT, if any
//! 6. Project surviving rows onto the requested columns
//!
//! The engine performs no I/O, holds no state across calls, and treats
//! the table as read-only, so concurrent executions may share one table.
//!
//! Column names that resolve to nothing do not fail by default: the
//! projection falls back to the first column and WHERE/ORDER BY clauses
//! are skipped. Strict mode (opt-in via `EngineOptions`) rejects them
//! instead.

mod errors;
mod executor;
mod filter;
mod parse;
mod resolve;
mod result;
mod sorter;

pub use errors::{EngineError, EngineErrorCode, EngineResult};
pub use executor::{EngineOptions, QueryEngine, UNSUPPORTED_QUERY_MESSAGE};
pub use resolve::ColumnResolution;
pub use result::ResultSet;
