//! csvql - a natural-language query engine for CSV data
//!
//! Loads a CSV source into an immutable in-memory table, translates
//! English questions into a constrained SQL SELECT subset, and evaluates
//! those statements against the table.

pub mod cli;
pub mod engine;
pub mod generator;
pub mod loader;
pub mod observability;
pub mod source;
