//! Fuzzy predicate evaluation
//!
//! Both `=` and `LIKE` collapse to a case-insensitive substring test:
//! the parser strips quotes and `%` markers, so by the time a predicate
//! reaches this point only the contained-in check remains.

use super::parse::{Predicate, PredicateOp};

/// Evaluates the WHERE predicate against row cells.
pub struct RowFilter;

impl RowFilter {
    /// Returns true if the cell satisfies the predicate.
    ///
    /// The predicate value is already lower-cased by the parser; only
    /// the cell needs folding here.
    pub fn matches(cell: &str, predicate: &Predicate) -> bool {
        let haystack = cell.to_lowercase();
        match predicate.op {
            PredicateOp::Eq | PredicateOp::Like => haystack.contains(&predicate.value),
        }
    }
}
