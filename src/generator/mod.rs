//! SQL generation subsystem for csvql
//!
//! Translates English questions into the engine's SELECT subset using
//! deterministic, substring-matched template rules. There is no model
//! call and no network access; generation is a pure function of the
//! question and the loaded table's headers.
//!
//! The engine owes nothing to this module. It accepts arbitrary text,
//! so a bad translation degrades into the engine's forgiving paths
//! rather than an error.

mod rules;

pub use rules::SqlGenerator;
