//! Column resolution policy
//!
//! Resolving a column token against the table's headers is the one
//! place the engine decides between "use what matched" and "apply the
//! forgiving default". The branch taken is explicit so callers and
//! tests can tell a real match from a fallback.

use crate::loader::Table;

/// Outcome of resolving one column token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnResolution {
    /// Token matched a header (case-insensitive, first match wins)
    Resolved(usize),
    /// Token matched nothing; the forgiving default applies
    Fallback,
}

impl ColumnResolution {
    /// Resolves a column token against the table headers.
    pub fn resolve(table: &Table, token: &str) -> Self {
        match table.header_index(token) {
            Some(idx) => ColumnResolution::Resolved(idx),
            None => ColumnResolution::Fallback,
        }
    }

    /// Index for projection use: a fallback selects column 0.
    pub fn index_or_first(self) -> usize {
        match self {
            ColumnResolution::Resolved(idx) => idx,
            ColumnResolution::Fallback => 0,
        }
    }

    /// Index for clause use: a fallback disables the clause.
    pub fn index(self) -> Option<usize> {
        match self {
            ColumnResolution::Resolved(idx) => Some(idx),
            ColumnResolution::Fallback => None,
        }
    }

    /// Returns true if the forgiving default applies.
    pub fn is_fallback(self) -> bool {
        matches!(self, ColumnResolution::Fallback)
    }
}
