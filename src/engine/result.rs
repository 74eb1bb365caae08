//! Result set types

use serde::Serialize;

/// Output of one engine invocation.
///
/// Serializes as `{columns, rows, rowCount, executionTime}`, the shape
/// the presentation layer renders directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Column names actually returned, in requested order
    pub columns: Vec<String>,
    /// Records matching `columns` in length and order
    pub rows: Vec<Vec<String>>,
    /// Always equals `rows.len()`
    pub row_count: usize,
    /// Evaluation wall-clock time in milliseconds, informational only
    pub execution_time: f64,
}

impl ResultSet {
    /// Builds a result set; `row_count` is derived, never supplied.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>, execution_time: f64) -> Self {
        let row_count = rows.len();
        Self {
            columns,
            rows,
            row_count,
            execution_time,
        }
    }

    /// One-row, one-column result for queries the engine rejects.
    ///
    /// The caller always receives something displayable; rejection is
    /// never an error.
    pub fn message(text: impl Into<String>, execution_time: f64) -> Self {
        Self::new(
            vec!["message".to_string()],
            vec![vec![text.into()]],
            execution_time,
        )
    }

    /// Returns true if no rows matched.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows returned.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
