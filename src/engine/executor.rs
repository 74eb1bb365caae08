//! Query execution
//!
//! Consumes parsed queries and produces result sets.
//!
//! Execution flow (strict order):
//! 1. Parse; non-SELECT input short-circuits to a message result
//! 2. Resolve the projection to header indices
//! 3. Filter rows with the single WHERE predicate
//! 4. Sort, if an ORDER BY column resolved
//! 5. Truncate to LIMIT
//! 6. Project surviving rows onto the requested columns

use std::time::Instant;

use crate::loader::Table;

use super::errors::{EngineError, EngineResult};
use super::filter::RowFilter;
use super::parse::{ParsedQuery, Projection, QueryParser};
use super::resolve::ColumnResolution;
use super::result::ResultSet;
use super::sorter::RowSorter;

/// Message returned for input the engine does not understand.
pub const UNSUPPORTED_QUERY_MESSAGE: &str =
    "Query type not supported. Please use SELECT statements.";

/// Engine behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Reject unresolved column names instead of applying the forgiving
    /// fallbacks. Off by default; the fallbacks are part of the product
    /// contract.
    pub strict_columns: bool,
}

/// Evaluates constrained SELECT statements against a loaded table.
///
/// Execution is a pure function of the query text and the table. The
/// engine holds no per-call state, so one instance may serve concurrent
/// callers sharing a table.
pub struct QueryEngine {
    parser: QueryParser,
    options: EngineOptions,
}

impl QueryEngine {
    /// Creates an engine with the default forgiving behavior.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Creates an engine with explicit options.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            parser: QueryParser::new(),
            options,
        }
    }

    /// Executes a query against a table.
    ///
    /// In default mode this never fails: unsupported input degrades to
    /// a one-row message result, unknown projection columns fall back
    /// to the first column, and unknown WHERE/ORDER BY columns disable
    /// their clause. Strict mode returns `CSVQL_UNKNOWN_COLUMN` for any
    /// unresolved name instead.
    pub fn execute(&self, query_text: &str, table: &Table) -> EngineResult<ResultSet> {
        let started = Instant::now();

        let parsed = match self.parser.parse(query_text) {
            Some(parsed) => parsed,
            None => {
                return Ok(ResultSet::message(
                    UNSUPPORTED_QUERY_MESSAGE,
                    elapsed_ms(started),
                ))
            }
        };

        let (columns, indices) = self.resolve_projection(&parsed, table)?;
        let mut rows = self.filter_rows(&parsed, table)?;
        self.sort_rows(&parsed, table, &mut rows)?;

        if let Some(limit) = parsed.limit {
            rows.truncate(limit);
        }

        let rows = project(rows, &indices);

        Ok(ResultSet::new(columns, rows, elapsed_ms(started)))
    }

    /// Step 2: map projection tokens to header indices.
    fn resolve_projection(
        &self,
        parsed: &ParsedQuery,
        table: &Table,
    ) -> EngineResult<(Vec<String>, Vec<usize>)> {
        match &parsed.projection {
            Projection::All => Ok((table.headers.clone(), (0..table.width()).collect())),
            Projection::Columns(tokens) => {
                let mut columns = Vec::with_capacity(tokens.len());
                let mut indices = Vec::with_capacity(tokens.len());

                for token in tokens {
                    let resolution = ColumnResolution::resolve(table, token);
                    if resolution.is_fallback() && self.options.strict_columns {
                        return Err(EngineError::unknown_column(token));
                    }
                    let index = resolution.index_or_first();
                    columns.push(table.headers.get(index).cloned().unwrap_or_default());
                    indices.push(index);
                }

                Ok((columns, indices))
            }
        }
    }

    /// Step 3: keep rows matching the predicate. An unresolved filter
    /// column means the clause filters nothing.
    fn filter_rows(&self, parsed: &ParsedQuery, table: &Table) -> EngineResult<Vec<Vec<String>>> {
        let predicate = match &parsed.predicate {
            Some(predicate) => predicate,
            None => return Ok(table.rows.clone()),
        };

        let resolution = ColumnResolution::resolve(table, &predicate.column);
        if resolution.is_fallback() && self.options.strict_columns {
            return Err(EngineError::unknown_column(&predicate.column));
        }

        let index = match resolution.index() {
            Some(index) => index,
            None => return Ok(table.rows.clone()),
        };

        Ok(table
            .rows
            .iter()
            .filter(|row| {
                let cell = row.get(index).map(String::as_str).unwrap_or("");
                RowFilter::matches(cell, predicate)
            })
            .cloned()
            .collect())
    }

    /// Step 4: sort in place when the ORDER BY column resolved.
    fn sort_rows(
        &self,
        parsed: &ParsedQuery,
        table: &Table,
        rows: &mut [Vec<String>],
    ) -> EngineResult<()> {
        let sort = match &parsed.sort {
            Some(sort) => sort,
            None => return Ok(()),
        };

        let resolution = ColumnResolution::resolve(table, &sort.column);
        if resolution.is_fallback() && self.options.strict_columns {
            return Err(EngineError::unknown_column(&sort.column));
        }

        if let Some(index) = resolution.index() {
            RowSorter::sort(rows, index, sort.direction);
        }

        Ok(())
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Step 6: emit only the requested cells, in request order. Missing
/// cells default to empty (the loader's width invariant makes this a
/// dead branch in practice).
fn project(rows: Vec<Vec<String>>, indices: &[usize]) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|row| {
            indices
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
