//! In-memory table model
//!
//! A `Table` is the parsed representation of one CSV source. It is built
//! once by the loader and never mutated afterward, so it can be shared
//! freely across concurrent query evaluations.

/// Parsed CSV source: ordered headers plus normalized data rows.
///
/// Invariant: every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names in file order. Order defines column identity.
    /// Duplicates are permitted; lookups resolve to the first match.
    pub headers: Vec<String>,
    /// Data rows, each exactly as wide as `headers`.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table, normalizing every row to the header width.
    ///
    /// Short rows are padded with empty strings; long rows are truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Case-insensitive header lookup. Returns the first matching index.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.headers
            .iter()
            .position(|h| h.to_lowercase() == needle)
    }
}
