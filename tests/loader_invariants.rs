//! Loader Invariant Tests
//!
//! Structural guarantees of CSV loading:
//! - Every row is normalized to the header width
//! - Quoting rules (escapes, commas, embedded newlines) are honored
//! - Whitespace-only lines produce no rows
//! - Empty sources fail, nothing else does

use csvql::loader::CsvParser;

// =============================================================================
// Width Normalization
// =============================================================================

/// Every row has exactly as many cells as the header, whatever the
/// source row looked like.
#[test]
fn test_rows_always_match_header_width() {
    let inputs = [
        "a,b,c\n1,2,3",
        "a,b,c\n1",
        "a,b,c\n1,2,3,4,5,6",
        "a,b,c\n1,2,3\n4\n5,6,7,8",
        "a,b,c\n\"x,y\",2",
    ];

    for raw in inputs {
        let table = CsvParser::parse(raw).unwrap();
        for row in &table.rows {
            assert_eq!(
                row.len(),
                table.headers.len(),
                "row width mismatch for input {:?}",
                raw
            );
        }
    }
}

#[test]
fn test_short_rows_padded_with_empty_strings() {
    let table = CsvParser::parse("a,b,c\n1,2").unwrap();
    assert_eq!(table.rows[0], vec!["1", "2", ""]);
}

#[test]
fn test_long_rows_truncated() {
    let table = CsvParser::parse("a,b\n1,2,3,4").unwrap();
    assert_eq!(table.rows[0], vec!["1", "2"]);
}

// =============================================================================
// Quoting Rules
// =============================================================================

/// A field `"a""b"` parses to the single cell value `a"b`.
#[test]
fn test_escaped_quotes() {
    let table = CsvParser::parse("v\n\"a\"\"b\"").unwrap();
    assert_eq!(table.rows[0][0], "a\"b");
}

#[test]
fn test_embedded_commas_stay_in_quoted_field() {
    let table = CsvParser::parse("industry,year\n\"Agriculture, Forestry and Fishing\",2021").unwrap();
    assert_eq!(table.rows[0][0], "Agriculture, Forestry and Fishing");
    assert_eq!(table.rows[0][1], "2021");
}

/// A quote opened on one line and closed two physical lines later is
/// one logical row; the embedded newlines survive in the cell.
#[test]
fn test_multi_line_quoted_field() {
    let raw = "note,id\n\"first\nsecond\nthird\",9\nplain,10";
    let table = CsvParser::parse(raw).unwrap();

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "first\nsecond\nthird");
    assert_eq!(table.rows[0][1], "9");
    assert_eq!(table.rows[1], vec!["plain", "10"]);
}

/// Fields are trimmed as a whole, including quoted fields with padding
/// inside the quotes. Deliberate behavior, not a defect.
#[test]
fn test_whole_field_trimming() {
    let table = CsvParser::parse("a,b\n  spaced  ,\" padded \"").unwrap();
    assert_eq!(table.rows[0][0], "spaced");
    assert_eq!(table.rows[0][1], "padded");
}

// =============================================================================
// Line Handling
// =============================================================================

#[test]
fn test_whitespace_only_lines_skipped() {
    let table = CsvParser::parse("a,b\n1,2\n   \n\t\n3,4\n\n").unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["3", "4"]);
}

#[test]
fn test_header_only_source_has_no_rows() {
    let table = CsvParser::parse("a,b,c").unwrap();
    assert_eq!(table.headers, vec!["a", "b", "c"]);
    assert!(table.rows.is_empty());
}

// =============================================================================
// Structural Failure
// =============================================================================

#[test]
fn test_empty_source_fails() {
    for raw in ["", "   ", "\n\n", " \n \t\n"] {
        let result = CsvParser::parse(raw);
        assert!(result.is_err(), "expected failure for {:?}", raw);
        assert_eq!(result.unwrap_err().code().code(), "CSVQL_EMPTY_SOURCE");
    }
}

// =============================================================================
// Header Semantics
// =============================================================================

#[test]
fn test_duplicate_headers_permitted() {
    let table = CsvParser::parse("id,name,id\n1,alice,9").unwrap();
    assert_eq!(table.headers, vec!["id", "name", "id"]);
    // Lookups resolve to the first occurrence.
    assert_eq!(table.header_index("ID"), Some(0));
}
