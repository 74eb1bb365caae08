//! Numeric-aware row ordering
//!
//! Cells are strings, but columns holding numbers should order as
//! numbers. When both cells parse as f64 they compare numerically;
//! any other pair falls back to lexicographic comparison.

use std::cmp::Ordering;

use super::parse::SortDirection;

/// Sorts result rows by one column.
pub struct RowSorter;

impl RowSorter {
    /// Sorts rows in place by the cell at `column`.
    pub fn sort(rows: &mut [Vec<String>], column: usize, direction: SortDirection) {
        rows.sort_by(|a, b| {
            let a_cell = a.get(column).map(String::as_str).unwrap_or("");
            let b_cell = b.get(column).map(String::as_str).unwrap_or("");

            let ordering = Self::compare_cells(a_cell, b_cell);

            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Numeric comparison when both cells parse; lexicographic otherwise.
    fn compare_cells(a: &str, b: &str) -> Ordering {
        match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(a_num), Ok(b_num)) => a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal),
            _ => a.cmp(b),
        }
    }
}
