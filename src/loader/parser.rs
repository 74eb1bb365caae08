//! CSV text parsing
//!
//! Splits raw CSV text into a header row and normalized data rows.
//! Handles quoted fields, escaped quotes (`""`), embedded commas, and
//! fields spanning multiple physical lines.

use super::errors::{LoaderError, LoaderResult};
use super::table::Table;

/// Parses raw CSV text into tables.
pub struct CsvParser;

impl CsvParser {
    /// Parses raw CSV text into a `Table`.
    ///
    /// The first physical line is the header row and fixes the table
    /// width. Whitespace-only lines produce no rows. A line carrying an
    /// odd number of `"` characters continues onto the following
    /// physical line(s), joined by `\n`, so quoted cells keep their
    /// embedded newlines.
    pub fn parse(raw: &str) -> LoaderResult<Table> {
        if raw.trim().is_empty() {
            return Err(LoaderError::empty_source("CSV source contains no data"));
        }

        let lines: Vec<&str> = raw.split('\n').collect();
        let headers = Self::split_fields(lines[0]);

        let mut rows = Vec::new();
        let mut i = 1;
        while i < lines.len() {
            if lines[i].trim().is_empty() {
                i += 1;
                continue;
            }

            // Join physical lines until the quote count balances out.
            let mut logical = lines[i].to_string();
            while Self::quote_count(&logical) % 2 == 1 && i + 1 < lines.len() {
                i += 1;
                logical.push('\n');
                logical.push_str(lines[i]);
            }

            rows.push(Self::split_fields(&logical));
            i += 1;
        }

        Ok(Table::new(headers, rows))
    }

    /// Splits one logical line into trimmed fields.
    ///
    /// Scans character by character with an in-quotes flag. `""` inside
    /// quotes emits a literal quote. The assembled field is trimmed as a
    /// whole, so spaces survive inside a quoted cell only when they are
    /// not at its edges.
    fn split_fields(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if !in_quotes => in_quotes = true,
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                ',' if !in_quotes => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            }
        }
        fields.push(current.trim().to_string());

        fields
    }

    fn quote_count(line: &str) -> usize {
        line.matches('"').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let table = CsvParser::parse("a,b,c\n1,2,3\n4,5,6").unwrap();

        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_input_fails() {
        let result = CsvParser::parse("");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code().code(), "CSVQL_EMPTY_SOURCE");

        assert!(CsvParser::parse("   \n  \n").is_err());
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let table = CsvParser::parse("name,industry\nA,\"Agriculture, Forestry\"").unwrap();

        assert_eq!(table.rows[0][1], "Agriculture, Forestry");
    }

    #[test]
    fn test_escaped_quote() {
        let table = CsvParser::parse("v\n\"a\"\"b\"").unwrap();

        assert_eq!(table.rows[0][0], "a\"b");
    }

    #[test]
    fn test_multi_line_field() {
        let table = CsvParser::parse("note,id\n\"line one\nline two\",7").unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "line one\nline two");
        assert_eq!(table.rows[0][1], "7");
    }

    #[test]
    fn test_whitespace_only_line_skipped() {
        let table = CsvParser::parse("a,b\n1,2\n   \n3,4").unwrap();

        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_fields_trimmed_whole() {
        // Trimming applies to the assembled field, quoted or not.
        let table = CsvParser::parse("a,b\n  1  , \" padded \" ").unwrap();

        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[0][1], "padded");
    }

    #[test]
    fn test_row_width_normalized() {
        let table = CsvParser::parse("a,b,c\n1\n1,2,3,4,5").unwrap();

        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }
}
